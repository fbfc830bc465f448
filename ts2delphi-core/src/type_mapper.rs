//! Type mapping between TypeScript primitive names and Pascal types.

/// Pascal primitive types that have a TypeScript counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveType {
    String,
    Float,
    Integer,
    Boolean,
}

impl PrimitiveType {
    /// Look up the Pascal primitive for a TypeScript type name.
    pub fn from_ts(name: &str) -> Option<Self> {
        match name {
            "string" => Some(PrimitiveType::String),
            "number" => Some(PrimitiveType::Float),
            "int" => Some(PrimitiveType::Integer),
            "boolean" | "bool" => Some(PrimitiveType::Boolean),
            _ => None,
        }
    }

    /// Get the Pascal type name
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveType::String => "String",
            PrimitiveType::Float => "Float",
            PrimitiveType::Integer => "Integer",
            PrimitiveType::Boolean => "Boolean",
        }
    }
}

/// Map a TypeScript type name to its Pascal name.
///
/// Names missing from the primitive table pass through unchanged.
pub fn map_type_name(name: &str) -> String {
    PrimitiveType::from_ts(name)
        .map(|ty| ty.as_str().to_string())
        .unwrap_or_else(|| name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_table() {
        assert_eq!(map_type_name("string"), "String");
        assert_eq!(map_type_name("number"), "Float");
        assert_eq!(map_type_name("int"), "Integer");
        assert_eq!(map_type_name("boolean"), "Boolean");
        assert_eq!(map_type_name("bool"), "Boolean");
    }

    #[test]
    fn test_unknown_types_pass_through() {
        assert_eq!(map_type_name("TThread"), "TThread");
        assert_eq!(map_type_name("DWORD"), "DWORD");
        // The table is case-sensitive
        assert_eq!(map_type_name("String"), "String");
        assert_eq!(map_type_name("Number"), "Number");
    }

    #[test]
    fn test_from_ts() {
        assert_eq!(PrimitiveType::from_ts("number"), Some(PrimitiveType::Float));
        assert_eq!(PrimitiveType::from_ts("void"), None);
    }
}
