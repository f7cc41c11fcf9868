use super::Rule;

/// Narrow the registry to the rules that take part in a run.
///
/// An empty `allow` list admits every rule. `deny` is applied afterwards.
/// Ids that name no rule are ignored here; see [`unknown_rule_ids`].
#[must_use]
pub fn select<'r>(all_rules: &'r [Rule], allow: &[String], deny: &[String]) -> Vec<&'r Rule> {
    all_rules
        .iter()
        .filter(|rule| allow.is_empty() || allow.iter().any(|id| id == rule.id))
        .filter(|rule| !deny.iter().any(|id| id == rule.id))
        .collect()
}

/// Ids from `requested` that no registered rule carries, in request order.
#[must_use]
pub fn unknown_rule_ids<'a>(all_rules: &[Rule], requested: &'a [String]) -> Vec<&'a str> {
    requested
        .iter()
        .filter(|id| !all_rules.iter().any(|rule| rule.id == id.as_str()))
        .map(String::as_str)
        .collect()
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod tests;
