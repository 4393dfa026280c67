//! Renaming pipeline — applies the rule table to a SQL dump in one pass.
//!
//! Each rule runs exactly once, in declaration order, over the then-current
//! text. The pipeline never fails on well-formed text and does not detect
//! rename collisions; reviewing the output is the caller's job.

use crate::core::rules::{self, Rule};

/// Result of one rewrite pass.
#[derive(Debug)]
pub struct Rewrite {
    /// Transformed text.
    pub text: String,
    /// Number of rules that matched at least once.
    pub rules_fired: usize,
    /// Total number of rules in the table.
    pub rules_total: usize,
}

/// Run the full rule table over `input`.
pub fn apply(input: &str) -> Rewrite {
    apply_rules(&rules::build(), input)
}

fn apply_rules(rules: &[Rule], input: &str) -> Rewrite {
    let mut text = input.to_string();
    let mut rules_fired = 0;

    for rule in rules {
        if let Some(rewritten) = rule.apply(&text) {
            text = rewritten;
            rules_fired += 1;
        }
    }

    Rewrite {
        text,
        rules_fired,
        rules_total: rules.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_through_unrelated_text() {
        let input = "CREATE TABLE receipts (id uuid PRIMARY KEY, total numeric);\n";
        let result = apply(input);
        assert_eq!(result.text, input);
        assert_eq!(result.rules_fired, 0);
    }

    #[test]
    fn renames_tables_and_columns() {
        let result = apply("SELECT household_id FROM households WHERE store_id = 1;");
        assert_eq!(result.text, "SELECT space_id FROM spaces WHERE supplier_id = 1;");
    }

    #[test]
    fn compound_names_rewrite_atomically() {
        let result = apply("ALTER TABLE ONLY user_households ADD CONSTRAINT user_households_pkey PRIMARY KEY (id);");
        assert_eq!(
            result.text,
            "ALTER TABLE ONLY user_spaces ADD CONSTRAINT user_spaces_pkey PRIMARY KEY (id);"
        );
    }

    #[test]
    fn index_prefix_keeps_suffix() {
        let result = apply("CREATE INDEX idx_household_foo ON spaces (foo);");
        assert_eq!(result.text, "CREATE INDEX idx_space_foo ON spaces (foo);");
    }

    #[test]
    fn merge_history_lookalike_is_untouched() {
        let input = "ALTER TABLE payment_account_merge_history OWNER TO postgres;";
        let result = apply(input);
        assert_eq!(result.text, input);
        // The identity rule still fires; it just changes nothing.
        assert_eq!(result.rules_fired, 1);
    }

    #[test]
    fn quoted_literals_rewrite_case_insensitively() {
        let result = apply("COMMENT ON TABLE spaces IS 'HOUSEHOLD';");
        assert_eq!(result.text, "COMMENT ON TABLE spaces IS 'space';");

        let result = apply("SELECT \"Store\" FROM t;");
        assert_eq!(result.text, "SELECT \"supplier\" FROM t;");
    }

    #[test]
    fn embedded_substring_without_boundary_is_untouched() {
        let input = "SELECT myhouseholdthing FROM t;";
        let result = apply(input);
        assert_eq!(result.text, input);
    }

    #[test]
    fn qualified_references_rewrite() {
        let result = apply("WHERE uh.household_id = r.store_id AND s.current_household_id IS NOT NULL");
        assert_eq!(
            result.text,
            "WHERE uh.space_id = r.supplier_id AND s.current_space_id IS NOT NULL"
        );
    }

    #[test]
    fn clause_fragments_rewrite_inside_function_bodies() {
        let body = "BEGIN\n  DELETE FROM user_households WHERE user_id = p_user_id;\n  INSERT INTO household_invitations (email) VALUES (p_email);\nEND;";
        let result = apply(body);
        assert!(result.text.contains("DELETE FROM user_spaces WHERE"));
        assert!(result.text.contains("INSERT INTO space_invitations (email)"));
    }

    #[test]
    fn parameter_openings_rewrite() {
        let result = apply("CREATE FUNCTION create_household_with_user(p_household_name text, p_user_id uuid)");
        assert_eq!(
            result.text,
            "CREATE FUNCTION create_space_with_user(p_space_name text, p_user_id uuid)"
        );
    }

    #[test]
    fn chinese_literal_rewrites() {
        let result = apply("RAISE EXCEPTION '的家庭';");
        assert_eq!(result.text, "RAISE EXCEPTION '的空间';");
    }

    #[test]
    fn second_pass_is_a_fixed_point() {
        let input = "CREATE TABLE household_invitations (household_id uuid REFERENCES households(id));\nCREATE POLICY households_select ON households;\nCREATE INDEX idx_stores_name ON stores (store_name);";
        let once = apply(input);
        let twice = apply(&once.text);
        assert_eq!(once.text, twice.text);
    }

    #[test]
    fn fired_count_reflects_matches() {
        let result = apply("households stores");
        // households, stores, plus nothing else
        assert_eq!(result.rules_fired, 2);
        assert!(result.rules_total > result.rules_fired);
    }
}
