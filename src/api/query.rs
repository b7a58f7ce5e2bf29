use crate::consts::MESSAGES_PATH;

/// Query parameters sent to `/api/v1/messages`, passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MessageQuery {
    pub(crate) talker: String,
    pub(crate) limit: i64,
    pub(crate) start: String,
    pub(crate) end: String,
    pub(crate) chatlab: i64,
}

impl MessageQuery {
    /// Key/value pairs in request order. Empty strings are kept as empty values.
    pub(crate) fn pairs(&self) -> [(&'static str, String); 5] {
        [
            ("talker", self.talker.clone()),
            ("limit", self.limit.to_string()),
            ("start", self.start.clone()),
            ("end", self.end.clone()),
            ("chatlab", self.chatlab.to_string()),
        ]
    }
}

pub(crate) fn messages_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), MESSAGES_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MessageQuery {
        MessageQuery {
            talker: "wxid_abc".to_string(),
            limit: 100,
            start: "2025-01-01".to_string(),
            end: String::new(),
            chatlab: 1,
        }
    }

    #[test]
    fn pairs_have_exactly_five_keys_in_order() {
        let pairs = sample().pairs();
        let keys: Vec<&str> = pairs.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, ["talker", "limit", "start", "end", "chatlab"]);
    }

    #[test]
    fn pairs_keep_values_verbatim() {
        let pairs = sample().pairs();
        assert_eq!(pairs[0].1, "wxid_abc");
        assert_eq!(pairs[1].1, "100");
        assert_eq!(pairs[2].1, "2025-01-01");
        assert_eq!(pairs[3].1, "");
        assert_eq!(pairs[4].1, "1");
    }

    #[test]
    fn pairs_keep_non_ascii_talker() {
        let mut q = sample();
        q.talker = "张三 & co".to_string();
        assert_eq!(q.pairs()[0].1, "张三 & co");
    }

    #[test]
    fn messages_url_joins_path() {
        assert_eq!(
            messages_url("http://127.0.0.1:5031"),
            "http://127.0.0.1:5031/api/v1/messages"
        );
    }

    #[test]
    fn messages_url_trims_trailing_slash() {
        assert_eq!(
            messages_url("http://127.0.0.1:5031/"),
            "http://127.0.0.1:5031/api/v1/messages"
        );
    }
}
