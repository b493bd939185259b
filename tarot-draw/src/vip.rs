//! VIP flag from page launch parameters.
use crate::constants::{VIP_QUERY_KEY, VIP_QUERY_VALUE};

/// True when the query string carries `vip=1`.
///
/// Accepts the string with or without its leading `?`. Only the first `vip`
/// parameter is consulted.
#[must_use]
pub fn vip_from_query(search: &str) -> bool {
    let query = search.strip_prefix('?').unwrap_or(search);
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(key, _)| *key == VIP_QUERY_KEY)
        .is_some_and(|(_, value)| value == VIP_QUERY_VALUE)
}

#[cfg(test)]
mod tests {
    use super::vip_from_query;

    #[test]
    fn recognises_vip_flag() {
        assert!(vip_from_query("?vip=1"));
        assert!(vip_from_query("vip=1"));
        assert!(vip_from_query("?lang=zh&vip=1"));
    }

    #[test]
    fn rejects_other_values() {
        assert!(!vip_from_query(""));
        assert!(!vip_from_query("?"));
        assert!(!vip_from_query("?vip=0"));
        assert!(!vip_from_query("?vip"));
        assert!(!vip_from_query("?vipx=1"));
        assert!(!vip_from_query("?vip=0&vip=1"));
    }
}
