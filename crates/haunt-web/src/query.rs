/// Grave seed from a location search string such as `?seed=7&debug`.
/// The leading `?` is optional; the first parseable `seed` wins.
pub fn parse_seed(search: &str) -> Option<u64> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .filter(|(key, _)| *key == "seed")
        .find_map(|(_, value)| value.trim().parse().ok())
}
