//! MySQL to Go type mapping

/// Represents a Go type for code generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoType {
    Time,
    Int,
    Float64,
    String,
    Bytes,
    Uint8s,
    Bool,
    RawJson,
}

impl GoType {
    /// Get the type string for code generation
    pub fn type_name(&self) -> &'static str {
        match self {
            GoType::Time => "time.Time",
            GoType::Int => "int",
            GoType::Float64 => "float64",
            GoType::String => "string",
            GoType::Bytes => "[]byte",
            GoType::Uint8s => "[]uint8",
            GoType::Bool => "bool",
            GoType::RawJson => "json.RawMessage",
        }
    }

    /// Import path the type needs, if any
    pub fn import(&self) -> Option<&'static str> {
        match self {
            GoType::Time => Some("time"),
            GoType::RawJson => Some("encoding/json"),
            _ => None,
        }
    }
}

/// Resolve MySQL data types to Go types
pub struct TypeResolver;

impl TypeResolver {
    /// Get the Go type for a database type name.
    ///
    /// Matching is case-insensitive on the bare type name as reported by the
    /// catalog; anything unrecognised maps to `string`.
    pub fn resolve(database_type_name: &str) -> GoType {
        match database_type_name.to_lowercase().as_str() {
            "datetime" | "timestamp" | "date" | "time" => GoType::Time,
            "tinyint" | "smallint" | "mediumint" | "int" | "integer" | "bigint" => GoType::Int,
            "float" | "double" | "real" => GoType::Float64,
            // No decimal type in the standard library; keep precision as text
            "decimal" | "numeric" => GoType::String,
            "char" | "varchar" | "tinytext" | "text" | "mediumtext" | "longtext" => GoType::String,
            "binary" | "varbinary" | "tinyblob" | "blob" | "mediumblob" | "longblob" => {
                GoType::Bytes
            }
            "bit" => GoType::Uint8s,
            "bool" | "boolean" => GoType::Bool,
            "json" => GoType::RawJson,
            "enum" | "set" => GoType::String,
            _ => GoType::String,
        }
    }
}
