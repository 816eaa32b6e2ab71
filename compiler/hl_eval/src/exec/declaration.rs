//! `name: type`

use crate::environment::VariableTable;
use crate::errors::DeclarationError;
use crate::statement::DECLARATION_SEPARATOR;
use crate::value::VarType;

/// Declare a variable with no value.
///
/// The line must split into exactly two parts. The type is matched after
/// trimming and lower-casing. An unsupported type registers nothing.
pub fn execute_declaration(vars: &mut VariableTable, line: &str) -> Result<(), DeclarationError> {
    let parts: Vec<&str> = line.split(DECLARATION_SEPARATOR).collect();
    let [name, ty] = parts.as_slice() else {
        return Err(DeclarationError::Malformed {
            line: line.to_string(),
        });
    };
    let name = name.trim();
    let ty = ty.trim().to_lowercase();

    let Some(var_type) = VarType::from_name(&ty) else {
        return Err(DeclarationError::UnsupportedType { ty });
    };
    vars.declare(name, var_type);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declares_integer() {
        let mut vars = VariableTable::new();
        assert_eq!(execute_declaration(&mut vars, "x: integer"), Ok(()));
        assert_eq!(vars.get("x").map(|v| v.ty), Some(VarType::Integer));
    }

    #[test]
    fn type_is_case_insensitive_and_trimmed() {
        let mut vars = VariableTable::new();
        assert_eq!(execute_declaration(&mut vars, "  rate :  DOUBLE  "), Ok(()));
        assert_eq!(vars.get("rate").map(|v| v.ty), Some(VarType::Double));
    }

    #[test]
    fn unsupported_type_registers_nothing() {
        let mut vars = VariableTable::new();
        assert_eq!(
            execute_declaration(&mut vars, "y: String"),
            Err(DeclarationError::UnsupportedType {
                ty: "string".to_string()
            })
        );
        assert!(!vars.contains("y"));
    }

    #[test]
    fn too_many_separators() {
        let mut vars = VariableTable::new();
        assert_eq!(
            execute_declaration(&mut vars, "a: integer: b"),
            Err(DeclarationError::Malformed {
                line: "a: integer: b".to_string()
            })
        );
        assert!(vars.is_empty());
    }
}
