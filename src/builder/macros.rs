//! Macros for ergonomic transition tables.

/// Build a `Vec<TransitionRule>` from `(source, trigger) => destination` entries.
///
/// # Example
///
/// ```
/// use fsa::core::TransitionRule;
/// use fsa::rules;
///
/// let table = rules![
///     ("S0", "0") => "S0",
///     ("S0", "1") => "S1",
/// ];
///
/// assert_eq!(table[1], TransitionRule::new("S0", "S1", "1"));
/// ```
#[macro_export]
macro_rules! rules {
    ($(($source:expr, $trigger:expr) => $destination:expr),* $(,)?) => {
        vec![$($crate::core::TransitionRule::new($source, $destination, $trigger)),*]
    };
}

#[cfg(test)]
mod tests {
    use crate::core::TransitionRule;

    #[test]
    fn rules_macro_orders_fields() {
        let table = rules![("A", "x") => "B"];
        assert_eq!(table, vec![TransitionRule::new("A", "B", "x")]);
    }

    #[test]
    fn rules_macro_accepts_expressions() {
        let source = String::from("S1");
        let table = rules![
            (source.clone(), "0") => "S2",
            (source, "1") => format!("S{}", 0),
        ];

        assert_eq!(table.len(), 2);
        assert_eq!(table[1].destination, "S0");
    }

    #[test]
    fn rules_macro_allows_empty_table() {
        let table: Vec<TransitionRule> = rules![];
        assert!(table.is_empty());
    }
}
