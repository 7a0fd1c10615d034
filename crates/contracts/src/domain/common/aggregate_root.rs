/// A row of one of the hosted backend tables
///
/// Carries the static table metadata the REST client and the admin screens
/// need to address a record without knowing its concrete type.
pub trait TableRow {
    // ============================================================================
    // Instance data
    // ============================================================================

    /// Value of the primary key column for this record
    fn key(&self) -> String;

    // ============================================================================
    // Table metadata
    // ============================================================================

    /// Index of the table in the system (e.g. "a003")
    fn table_index() -> &'static str;

    /// Table name in the backend (e.g. "products")
    fn table_name() -> &'static str;

    /// Primary key column (e.g. "id", "slug", "key")
    fn key_column() -> &'static str;

    /// Element name for the UI (singular)
    fn element_name() -> &'static str;

    /// List name for the UI (plural)
    fn list_name() -> &'static str;

    /// Column list for `select=`; `*` unless the table embeds a join
    fn select_columns() -> &'static str {
        "*"
    }

    /// Full name of the table in the system (e.g. "a003_products")
    fn full_name() -> String {
        format!("{}_{}", Self::table_index(), Self::table_name())
    }
}
