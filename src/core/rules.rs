//! The ordered rename rule table: household → space, store → supplier.
//!
//! Rule order is part of the contract. Every rule observes the output of the
//! rules before it, so compound identifiers (`household_invitations`) must be
//! rewritten before the bare tokens they contain (`households`), and specific
//! prefixes before general ones. Do not sort, dedupe, or collapse this table
//! into a map.

use regex::Regex;

/// How a rule's pattern binds to the surrounding text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Whole identifier token, bounded on both sides. Compound names like
    /// `household_invitations` are one atomic token.
    Word,
    /// Start of a token only; the suffix is left untouched. Used for index
    /// and RLS policy name families that share a common prefix.
    Prefix,
    /// Quoted literal, matched case-insensitively. The replacement is
    /// fixed-case and carries the same quoting style.
    QuotedLiteral,
    /// Exact substring, no boundary detection. The pattern carries its own
    /// disambiguating context (`FROM user_households WHERE`, `(p_household_id`).
    Fragment,
    /// Dotted column reference (`.household_id`), bounded on the right so a
    /// longer column name is never truncated mid-token.
    QualifiedColumn,
}

/// One entry of the rule table, compiled and ready to apply.
#[derive(Debug, Clone)]
pub struct Rule {
    pub kind: RuleKind,
    pub from: &'static str,
    pub to: &'static str,
    pattern: Regex,
}

impl Rule {
    fn new(kind: RuleKind, from: &'static str, to: &'static str) -> Self {
        let escaped = regex::escape(from);
        let pattern = match kind {
            RuleKind::Word => format!(r"\b{}\b", escaped),
            RuleKind::Prefix => format!(r"\b{}", escaped),
            RuleKind::QuotedLiteral => format!(r"(?i){}", escaped),
            RuleKind::Fragment => escaped,
            RuleKind::QualifiedColumn => format!(r"{}\b", escaped),
        };
        // Patterns are fixed at compile time; an invalid one is a bug.
        let pattern = Regex::new(&pattern).unwrap();
        Rule {
            kind,
            from,
            to,
            pattern,
        }
    }

    /// Apply this rule once over `text`. Returns the rewritten text, or
    /// `None` when nothing matched.
    pub fn apply(&self, text: &str) -> Option<String> {
        match self.pattern.replace_all(text, self.to) {
            std::borrow::Cow::Borrowed(_) => None,
            std::borrow::Cow::Owned(rewritten) => Some(rewritten),
        }
    }
}

/// The full rule table in application order.
///
/// `payment_account_merge_history` maps to itself on purpose: it looks like a
/// merge-history table that should follow `store_merge_history`, but it is not
/// part of the renamed vocabulary. The no-op entry documents that decision.
const RULES: &[(RuleKind, &str, &str)] = &[
    // Table names — compound names first, bare names last
    (RuleKind::Word, "household_invitations", "space_invitations"),
    (RuleKind::Word, "user_households", "user_spaces"),
    (RuleKind::Word, "store_merge_history", "supplier_merge_history"),
    (
        RuleKind::Word,
        "payment_account_merge_history",
        "payment_account_merge_history",
    ),
    (RuleKind::Word, "households", "spaces"),
    (RuleKind::Word, "stores", "suppliers"),
    // Column names
    (RuleKind::Word, "current_household_id", "current_space_id"),
    (RuleKind::Word, "household_id", "space_id"),
    (RuleKind::Word, "household_name", "space_name"),
    (RuleKind::Word, "target_store_id", "target_supplier_id"),
    (RuleKind::Word, "source_store_name", "source_supplier_name"),
    (RuleKind::Word, "store_id", "supplier_id"),
    (RuleKind::Word, "store_name", "supplier_name"),
    // Function parameters
    (RuleKind::Word, "p_household_address", "p_space_address"),
    (RuleKind::Word, "p_household_name", "p_space_name"),
    (RuleKind::Word, "p_household_id", "p_space_id"),
    (RuleKind::Word, "p_store_id", "p_supplier_id"),
    // Function-local variables
    (RuleKind::Word, "v_final_household_name", "v_final_space_name"),
    (RuleKind::Word, "v_household_name", "v_space_name"),
    (RuleKind::Word, "v_household_id", "v_space_id"),
    (RuleKind::Word, "householdData", "spaceData"),
    (RuleKind::Word, "householdError", "spaceError"),
    // Function names
    (RuleKind::Word, "check_household_has_admin", "check_space_has_admin"),
    (
        RuleKind::Word,
        "create_household_invitation",
        "create_space_invitation",
    ),
    (
        RuleKind::Word,
        "create_household_with_user",
        "create_space_with_user",
    ),
    (
        RuleKind::Word,
        "create_user_with_household",
        "create_user_with_space",
    ),
    (
        RuleKind::Word,
        "get_household_member_users",
        "get_space_member_users",
    ),
    (
        RuleKind::Word,
        "get_household_members_with_last_signin",
        "get_space_members_with_last_signin",
    ),
    (
        RuleKind::Word,
        "get_invitation_by_household_email",
        "get_invitation_by_space_email",
    ),
    (RuleKind::Word, "get_user_household_id", "get_user_space_id"),
    (RuleKind::Word, "get_user_household_ids", "get_user_space_ids"),
    (
        RuleKind::Word,
        "get_user_household_ids_for_rls",
        "get_user_space_ids_for_rls",
    ),
    (
        RuleKind::Word,
        "get_user_current_household_id",
        "get_user_current_space_id",
    ),
    (
        RuleKind::Word,
        "insert_household_invitation",
        "insert_space_invitation",
    ),
    (RuleKind::Word, "is_admin_of_household", "is_admin_of_space"),
    (RuleKind::Word, "is_household_admin", "is_space_admin"),
    (RuleKind::Word, "is_user_household_admin", "is_user_space_admin"),
    (RuleKind::Word, "remove_household_member", "remove_space_member"),
    (
        RuleKind::Word,
        "update_user_current_household",
        "update_user_current_space",
    ),
    (
        RuleKind::Word,
        "user_belongs_to_household",
        "user_belongs_to_space",
    ),
    (RuleKind::Word, "users_in_same_household", "users_in_same_space"),
    // Index name prefixes — specific families before the generic catch-all
    (
        RuleKind::Prefix,
        "idx_household_invitations_",
        "idx_space_invitations_",
    ),
    (RuleKind::Prefix, "idx_user_households_", "idx_user_spaces_"),
    (
        RuleKind::Prefix,
        "idx_store_merge_history_",
        "idx_supplier_merge_history_",
    ),
    (RuleKind::Prefix, "idx_stores_", "idx_suppliers_"),
    (RuleKind::Prefix, "idx_receipts_store_", "idx_receipts_supplier_"),
    (RuleKind::Prefix, "idx_household_", "idx_space_"),
    // Constraint names
    (
        RuleKind::Word,
        "household_invitations_pkey",
        "space_invitations_pkey",
    ),
    (
        RuleKind::Word,
        "household_invitations_unique_email",
        "space_invitations_unique_email",
    ),
    (RuleKind::Word, "user_households_pkey", "user_spaces_pkey"),
    (
        RuleKind::Word,
        "user_households_user_id_household_id_key",
        "user_spaces_user_id_space_id_key",
    ),
    (
        RuleKind::Word,
        "store_merge_history_pkey",
        "supplier_merge_history_pkey",
    ),
    (RuleKind::Word, "stores_pkey", "suppliers_pkey"),
    (
        RuleKind::Word,
        "stores_household_id_name_key",
        "suppliers_space_id_name_key",
    ),
    (RuleKind::Word, "households_pkey", "spaces_pkey"),
    // Foreign-key constraint names
    (RuleKind::Word, "household_id_fkey", "space_id_fkey"),
    (RuleKind::Word, "store_id_fkey", "supplier_id_fkey"),
    (RuleKind::Word, "target_store_id_fkey", "target_supplier_id_fkey"),
    (
        RuleKind::Word,
        "household_invitations_space_id_fkey",
        "space_invitations_space_id_fkey",
    ),
    (
        RuleKind::Word,
        "user_households_space_id_fkey",
        "user_spaces_space_id_fkey",
    ),
    (RuleKind::Word, "stores_space_id_fkey", "suppliers_space_id_fkey"),
    (
        RuleKind::Word,
        "store_merge_history_space_id_fkey",
        "supplier_merge_history_space_id_fkey",
    ),
    (
        RuleKind::Word,
        "store_merge_history_target_supplier_id_fkey",
        "supplier_merge_history_target_supplier_id_fkey",
    ),
    // Trigger names
    (
        RuleKind::Word,
        "update_households_updated_at",
        "update_spaces_updated_at",
    ),
    (
        RuleKind::Word,
        "update_stores_updated_at",
        "update_suppliers_updated_at",
    ),
    // RLS policy name prefixes
    (
        RuleKind::Prefix,
        "household_invitations_",
        "space_invitations_",
    ),
    (RuleKind::Prefix, "households_", "spaces_"),
    (RuleKind::Prefix, "user_households_", "user_spaces_"),
    (
        RuleKind::Prefix,
        "store_merge_history_",
        "supplier_merge_history_",
    ),
    (RuleKind::Prefix, "stores_", "suppliers_"),
    // Quoted string literals — case-insensitive, quoting style preserved
    (RuleKind::QuotedLiteral, "'household'", "'space'"),
    (RuleKind::QuotedLiteral, "\"household\"", "\"space\""),
    (RuleKind::QuotedLiteral, "'store'", "'supplier'"),
    (RuleKind::QuotedLiteral, "\"store\"", "\"supplier\""),
    // Message fragments in function bodies. The second entry is already in
    // the new vocabulary; the identity mapping records that it was checked.
    (RuleKind::Fragment, "'a household'", "'a space'"),
    (RuleKind::Fragment, "'的家庭'", "'的空间'"),
    (
        RuleKind::Fragment,
        "Cannot remove the last admin of a household",
        "Cannot remove the last admin of a space",
    ),
    (
        RuleKind::Fragment,
        "space must have at least one admin",
        "space must have at least one admin",
    ),
    // Clause fragments referencing user_households
    (
        RuleKind::Fragment,
        "FROM user_households WHERE",
        "FROM user_spaces WHERE",
    ),
    (RuleKind::Fragment, "INTO user_households", "INTO user_spaces"),
    (
        RuleKind::Fragment,
        "INSERT INTO user_households",
        "INSERT INTO user_spaces",
    ),
    (RuleKind::Fragment, "UPDATE user_households", "UPDATE user_spaces"),
    (
        RuleKind::Fragment,
        "DELETE FROM user_households",
        "DELETE FROM user_spaces",
    ),
    // Clause fragments referencing the base tables
    (RuleKind::Fragment, "FROM households WHERE", "FROM spaces WHERE"),
    (RuleKind::Fragment, "INTO households", "INTO spaces"),
    (RuleKind::Fragment, "INSERT INTO households", "INSERT INTO spaces"),
    (RuleKind::Fragment, "FROM stores WHERE", "FROM suppliers WHERE"),
    (RuleKind::Fragment, "INTO stores", "INTO suppliers"),
    (RuleKind::Fragment, "INSERT INTO stores", "INSERT INTO suppliers"),
    (
        RuleKind::Fragment,
        "FROM household_invitations",
        "FROM space_invitations",
    ),
    (
        RuleKind::Fragment,
        "INTO household_invitations",
        "INTO space_invitations",
    ),
    (
        RuleKind::Fragment,
        "INSERT INTO household_invitations",
        "INSERT INTO space_invitations",
    ),
    (
        RuleKind::Fragment,
        "UPDATE household_invitations",
        "UPDATE space_invitations",
    ),
    // Qualified column references
    (RuleKind::QualifiedColumn, ".household_id", ".space_id"),
    (RuleKind::QualifiedColumn, ".store_id", ".supplier_id"),
    (RuleKind::QualifiedColumn, ".store_name", ".supplier_name"),
    (RuleKind::QualifiedColumn, ".household_name", ".space_name"),
    (
        RuleKind::QualifiedColumn,
        ".current_household_id",
        ".current_space_id",
    ),
    // Parameter openings in function signatures
    (RuleKind::Fragment, "(p_household_id", "(p_space_id"),
    (RuleKind::Fragment, "(p_household_name", "(p_space_name"),
    (RuleKind::Fragment, "(p_household_address", "(p_space_address"),
];

/// Build the compiled rule table in application order.
pub fn build() -> Vec<Rule> {
    RULES
        .iter()
        .map(|&(kind, from, to)| Rule::new(kind, from, to))
        .collect()
}
