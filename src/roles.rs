pub const DEFAULT_ROLES: [&str; 3] = ["Python開発者", "Web開発者", "データサイエンティスト"];

pub fn default_roles() -> Vec<String> {
    DEFAULT_ROLES.iter().map(|role| role.to_string()).collect()
}

pub fn default_role() -> String {
    DEFAULT_ROLES[0].to_string()
}

pub fn system_prompt(role: &str) -> String {
    format!("あなたは{}の見識を持つ有能なアシスタントです。", role)
}

// Accepts a 1-based list position or an exact role label.
pub fn resolve<'a>(roles: &'a [String], selector: &str) -> Option<&'a str> {
    let selector = selector.trim();
    if let Ok(position) = selector.parse::<usize>() {
        return position
            .checked_sub(1)
            .and_then(|i| roles.get(i))
            .map(String::as_str);
    }
    roles
        .iter()
        .find(|role| role.as_str() == selector)
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_prompt_interpolates_role() {
        let prompt = system_prompt("Python開発者");
        assert!(prompt.contains("Python開発者"));
        assert_eq!(prompt, "あなたはPython開発者の見識を持つ有能なアシスタントです。");
    }

    #[test]
    fn resolve_by_position_is_one_based() {
        let roles = default_roles();
        assert_eq!(resolve(&roles, "1"), Some("Python開発者"));
        assert_eq!(resolve(&roles, "3"), Some("データサイエンティスト"));
        assert_eq!(resolve(&roles, "0"), None);
        assert_eq!(resolve(&roles, "4"), None);
    }

    #[test]
    fn resolve_by_label_requires_exact_match() {
        let roles = default_roles();
        assert_eq!(resolve(&roles, "Web開発者"), Some("Web開発者"));
        assert_eq!(resolve(&roles, " Web開発者 "), Some("Web開発者"));
        assert_eq!(resolve(&roles, "Web"), None);
    }
}
