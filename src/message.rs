use serde::{Serialize, Deserialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Message { role: "system".to_string(), content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Message { role: "user".to_string(), content: content.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_role_and_content() {
        let json = serde_json::to_value(Message::user("こんにちは")).unwrap();
        assert_eq!(json["role"], "user");
        assert_eq!(json["content"], "こんにちは");

        let json = serde_json::to_value(Message::system("persona")).unwrap();
        assert_eq!(json["role"], "system");
    }
}
