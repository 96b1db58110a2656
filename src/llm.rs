use reqwest::blocking::Client;
use colored::Colorize;

use crate::config::Config;
use crate::error::RequestError;
use crate::message::Message;
use crate::roles;

pub struct LlmClient {
    http: Client,
    api_addr: String,
    api_key: String,
    model: String,
    temperature: f32,
    debug: bool,
}

impl LlmClient {
    // Built once at startup and reused read-only for the process lifetime.
    pub fn new(config: &Config) -> Self {
        LlmClient {
            http: Client::new(),
            api_addr: config.api_addr.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            debug: config.debug,
        }
    }

    pub fn generate(&self, system_role: &str, user_query: &str) -> Result<String, RequestError> {
        let conversation = build_conversation(system_role, user_query);
        let url = format!("{}/chat/completions", self.api_addr);
        let payload = serde_json::json!({
            "model": &self.model,
            "messages": conversation,
            "temperature": self.temperature,
        });

        if self.debug {
            if let Ok(pretty) = serde_json::to_string_pretty(&payload) {
                println!("{}", format!("[API request]\n{}", pretty).truecolor(128, 128, 128));
            }
        }

        let request = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&payload);

        let res = match request.send() {
            Ok(res) => {
                if res.status().is_success() {
                    res
                } else {
                    return Err(match res.status().as_u16() {
                        401 => RequestError::Auth,
                        404 => RequestError::Endpoint,
                        code => RequestError::Status(code),
                    });
                }
            }
            Err(e) if e.is_connect() => return Err(RequestError::Connect),
            Err(e) => return Err(RequestError::Transport(e)),
        };

        let json: serde_json::Value = res.json().map_err(|e| RequestError::Decode(e.to_string()))?;
        match json["choices"][0]["message"]["content"].as_str() {
            Some(content) => Ok(content.to_string()),
            None => Err(RequestError::Decode("reply carries no message content".to_string())),
        }
    }
}

pub fn build_conversation(system_role: &str, user_query: &str) -> Vec<Message> {
    vec![
        Message::system(roles::system_prompt(system_role)),
        Message::user(user_query),
    ]
}
