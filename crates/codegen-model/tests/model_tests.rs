use codegen_model::{HasParameters, ModelError, ParameterList, PhpFunction, PhpMethod, PhpParameter, PhpValue};
use serde_json::json;

#[test]
fn test_simple_parameters_scenario() -> Result<(), ModelError> {
    // Partiendo de una lista vacía: a:int sin default, b:string = "default"
    let mut f = PhpFunction::new("scenario");
    f.add_simple_parameter("a", Some("int"), None);
    f.add_simple_parameter("b", Some("string"), Some(PhpValue::from("default")));

    let params = f.get_parameters();
    assert_eq!(params.len(), 2);
    assert_eq!(params[0].name(), "a");
    assert_eq!(params[0].type_hint(), Some("int"));
    assert!(!params[0].has_default_value());
    assert_eq!(params[1].name(), "b");
    assert_eq!(params[1].type_hint(), Some("string"));
    assert_eq!(params[1].default_value(), Some(&PhpValue::String("default".into())));
    Ok(())
}

#[test]
fn test_length_tracks_adds_and_removes() -> Result<(), ModelError> {
    let mut list = ParameterList::new();
    for name in ["a", "b", "c", "d", "e"] {
        list.add_parameter(PhpParameter::new(name));
    }
    list.remove_parameter(4)?;
    list.remove_parameter(0)?;
    // Un remove fallido no cuenta
    assert!(list.remove_parameter(10).is_err());
    assert_eq!(list.get_parameters().len(), 5 - 2);
    Ok(())
}

#[test]
fn test_positions_are_contiguous_after_remove() -> Result<(), ModelError> {
    let mut m = PhpMethod::new("handle");
    m.set_parameters(["a", "b", "c", "d"].into_iter().map(PhpParameter::new));
    m.remove_parameter(1)?;
    for (i, p) in m.get_parameters().iter().enumerate() {
        assert_eq!(m.get_parameter(i)?, p);
    }
    assert_eq!(m.parameter_names(), vec!["a", "c", "d"]);
    Ok(())
}

#[test]
fn test_get_unknown_name_fails_with_not_found() {
    let mut f = PhpFunction::new("f");
    f.add_simple_parameter("y", None, None);
    let err = f.get_parameter("x").unwrap_err();
    assert_eq!(err, ModelError::NotFound("no hay parámetro llamado \"x\"".to_string()));
}

#[test]
fn test_replace_at_len_appends() -> Result<(), ModelError> {
    let mut f = PhpFunction::new("f");
    f.add_simple_parameter("a", None, None);
    let len = f.parameter_count();
    f.replace_parameter(len, PhpParameter::new("b"))?;
    assert_eq!(f.parameter_names(), vec!["a", "b"]);

    let err = f.replace_parameter(3, PhpParameter::new("z")).unwrap_err();
    assert_eq!(err, ModelError::InvalidArgument("la posición debe estar en el rango [0, 2]".to_string()));
    Ok(())
}

#[test]
fn test_empty_list_boundaries() -> Result<(), ModelError> {
    let mut list = ParameterList::new();
    assert!(matches!(list.get_parameter(0usize), Err(ModelError::NotFound(_))));
    assert!(matches!(list.remove_parameter(0), Err(ModelError::NotFound(_))));
    assert!(matches!(list.replace_parameter(1, PhpParameter::new("x")), Err(ModelError::InvalidArgument(_))));
    assert!(list.is_empty());

    // en una lista vacía, la posición 0 es len: agrega
    list.replace_parameter(0, PhpParameter::new("x"))?;
    assert_eq!(list.names(), vec!["x"]);
    Ok(())
}

#[test]
fn test_non_finite_defaults_round_trip_and_hash_apart() -> Result<(), ModelError> {
    let mut nan = PhpFunction::new("f");
    let mut inf = PhpFunction::new("f");
    nan.add_simple_parameter("x", None, Some(PhpValue::Float(f64::NAN)));
    inf.add_simple_parameter("x", None, Some(PhpValue::Float(f64::INFINITY)));
    assert_ne!(nan.signature_hash()?, inf.signature_hash()?);

    let back: PhpFunction = serde_json::from_value(serde_json::to_value(&inf)?)?;
    assert_eq!(back, inf);
    assert_eq!(back.signature_hash()?, inf.signature_hash()?);

    let back_nan: PhpFunction = serde_json::from_value(serde_json::to_value(&nan)?)?;
    assert!(matches!(back_nan.get_parameter("x")?.default_value(), Some(PhpValue::Float(v)) if v.is_nan()));
    assert_eq!(back_nan.signature_hash()?, nan.signature_hash()?);
    Ok(())
}

#[test]
fn test_desc_parameter_sets_default_when_given() -> Result<(), ModelError> {
    let mut f = PhpFunction::new("f");
    f.add_simple_desc_parameter("limit", Some("int"), Some("maximum rows"), Some(PhpValue::Int(10)))
     .add_simple_desc_parameter("offset", Some("int"), Some("first row"), None)
     .add_simple_desc_parameter("filter", Some("?array"), None, Some(PhpValue::Null));

    let limit = f.get_parameter("limit")?;
    assert_eq!(limit.type_description(), Some("maximum rows"));
    assert_eq!(limit.default_value(), Some(&PhpValue::Int(10)));
    assert!(!f.get_parameter("offset")?.has_default_value());
    // default null es un default presente
    assert_eq!(f.get_parameter(2usize)?.default_value(), Some(&PhpValue::Null));
    Ok(())
}

#[test]
fn test_get_parameter_mut_edits_in_place() -> Result<(), ModelError> {
    let mut f = PhpFunction::new("f");
    f.add_simple_parameter("items", Some("array"), Some(PhpValue::Array(vec![])));
    f.get_parameter_mut("items")?.set_passed_by_reference(true).unset_default_value();
    let items = f.get_parameter(0usize)?;
    assert!(items.is_passed_by_reference());
    assert!(!items.has_default_value());
    Ok(())
}

#[test]
fn test_function_serializes_parameters_in_order() -> Result<(), ModelError> {
    let mut f = PhpFunction::new("format").with_namespace("App");
    f.add_simple_parameter("value", Some("string"), None)
     .add_simple_parameter("eol", None, Some(PhpValue::expression("PHP_EOL")));
    let v = serde_json::to_value(&f)?;
    assert_eq!(v["parameters"][0]["name"], json!("value"));
    assert_eq!(v["parameters"][1]["default_value"], json!({"kind": "expression", "value": "PHP_EOL"}));

    let back: PhpFunction = serde_json::from_value(v)?;
    assert_eq!(back, f);
    Ok(())
}

#[test]
fn test_signature_hash_matches_for_equal_signatures() -> Result<(), ModelError> {
    let mut f = PhpFunction::new("f");
    let mut m = PhpMethod::new("m");
    f.add_simple_parameter("a", Some("int"), Some(PhpValue::Int(1)));
    m.add_simple_parameter("a", Some("int"), Some(PhpValue::Int(1)));
    assert_eq!(f.signature_hash()?, m.signature_hash()?);

    m.get_parameter_mut(0usize)?.set_default_value(2);
    assert_ne!(f.signature_hash()?, m.signature_hash()?);
    Ok(())
}
