//! Field-name translation between the domain model (camelCase, as exposed
//! over the JSON API) and the snake_case columns of the backing tables.

/// Two-way mapping of `(field, column)` pairs for one table.
#[derive(Debug, Clone, Copy)]
pub struct ColumnMap {
    pub table: &'static str,
    pairs: &'static [(&'static str, &'static str)],
}

/// A value bound to a column in a generated statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnValue {
    Text(String),
    Int(i32),
}

impl ColumnMap {
    pub const fn new(table: &'static str, pairs: &'static [(&'static str, &'static str)]) -> Self {
        Self { table, pairs }
    }

    /// Column name for a domain field.
    pub fn column(&self, field: &str) -> Option<&'static str> {
        self.pairs.iter().find(|(f, _)| *f == field).map(|(_, c)| *c)
    }

    /// Domain field name for a column.
    pub fn field(&self, column: &str) -> Option<&'static str> {
        self.pairs.iter().find(|(_, c)| *c == column).map(|(f, _)| *f)
    }

    /// Comma-separated column list in declaration order, for SELECT/RETURNING.
    pub fn select_list(&self) -> String {
        self.pairs.iter().map(|(_, c)| *c).collect::<Vec<_>>().join(", ")
    }
}

pub const MEMBER_COLUMNS: ColumnMap = ColumnMap::new(
    "members",
    &[
        ("id", "id"),
        ("name", "name"),
        ("status", "status"),
        ("absentCount", "absent_count"),
        ("missedAssignmentCount", "missed_assignment_count"),
    ],
);

pub const SETTINGS_COLUMNS: ColumnMap = ColumnMap::new(
    "settings",
    &[
        ("id", "id"),
        ("teamName", "team_name"),
        ("discordWebhookUrl", "discord_webhook_url"),
    ],
);

/// Convert a counter to the signed column type, saturating at `i32::MAX`.
pub fn count_to_column(n: u32) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

/// Convert a counter column back, treating negatives as zero.
pub fn count_from_column(n: i32) -> u32 {
    u32::try_from(n).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_fields_map_both_ways() {
        assert_eq!(MEMBER_COLUMNS.column("absentCount"), Some("absent_count"));
        assert_eq!(MEMBER_COLUMNS.column("missedAssignmentCount"), Some("missed_assignment_count"));
        assert_eq!(MEMBER_COLUMNS.field("missed_assignment_count"), Some("missedAssignmentCount"));
        assert_eq!(MEMBER_COLUMNS.column("createdAt"), None);
    }

    #[test]
    fn settings_fields_map_both_ways() {
        assert_eq!(SETTINGS_COLUMNS.column("teamName"), Some("team_name"));
        assert_eq!(SETTINGS_COLUMNS.field("discord_webhook_url"), Some("discordWebhookUrl"));
    }

    #[test]
    fn select_list_keeps_declaration_order() {
        assert_eq!(
            MEMBER_COLUMNS.select_list(),
            "id, name, status, absent_count, missed_assignment_count"
        );
    }

    #[test]
    fn counters_saturate_and_clamp() {
        assert_eq!(count_to_column(u32::MAX), i32::MAX);
        assert_eq!(count_from_column(-3), 0);
        assert_eq!(count_from_column(7), 7);
    }
}
