use super::*;

#[test]
fn type_names_are_lower_case_only() {
    assert_eq!(VarType::from_name("integer"), Some(VarType::Integer));
    assert_eq!(VarType::from_name("double"), Some(VarType::Double));
    assert_eq!(VarType::from_name("Integer"), None);
    assert_eq!(VarType::from_name("string"), None);
}

#[test]
fn integer_literals() {
    assert_eq!(VarType::Integer.parse_literal("5"), Some(Value::Int(5)));
    assert_eq!(VarType::Integer.parse_literal("-12"), Some(Value::Int(-12)));
    assert_eq!(VarType::Integer.parse_literal("2.5"), None);
    assert_eq!(VarType::Integer.parse_literal("abc"), None);
    assert_eq!(VarType::Integer.parse_literal(""), None);
}

#[test]
fn double_literals() {
    assert_eq!(VarType::Double.parse_literal("2.5"), Some(Value::Double(2.5)));
    assert_eq!(VarType::Double.parse_literal("3"), Some(Value::Double(3.0)));
    assert_eq!(VarType::Double.parse_literal("1e3"), Some(Value::Double(1000.0)));
    assert_eq!(VarType::Double.parse_literal("x"), None);
}

#[test]
fn int_arithmetic_stays_int() {
    assert_eq!(Value::Int(2).plus(Value::Int(3)), Value::Int(5));
    assert_eq!(Value::Int(2).minus(Value::Int(3)), Value::Int(-1));
}

#[test]
fn int_arithmetic_wraps() {
    assert_eq!(Value::Int(i64::MAX).plus(Value::Int(1)), Value::Int(i64::MIN));
}

#[test]
fn mixed_arithmetic_degrades_to_double() {
    assert_eq!(Value::Int(2).plus(Value::Double(0.5)), Value::Double(2.5));
    assert_eq!(Value::Double(2.5).minus(Value::Int(1)), Value::Double(1.5));
}

#[test]
fn compare_mixed_and_nan() {
    assert_eq!(Value::Int(5).compare(Value::Double(5.0)), Some(Ordering::Equal));
    assert_eq!(Value::Int(5).compare(Value::Int(10)), Some(Ordering::Less));
    assert_eq!(Value::Double(f64::NAN).compare(Value::Int(1)), None);
}

#[test]
fn display_forms() {
    assert_eq!(Value::Int(5).to_string(), "5");
    assert_eq!(Value::Double(5.0).to_string(), "5.0");
    assert_eq!(Value::Double(2.5).to_string(), "2.5");
    assert_eq!(Value::Double(-0.25).to_string(), "-0.25");
    assert_eq!(Value::Double(f64::INFINITY).to_string(), "inf");
    assert_eq!(Value::Double(f64::NEG_INFINITY).to_string(), "-inf");
    assert_eq!(Value::Double(f64::NAN).to_string(), "nan");
}
