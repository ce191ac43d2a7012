use super::*;

#[test]
fn test_defaults() {
    let options = ConvertOptions::default();
    assert_eq!(options.chunk_size, 3000);
    assert!(options.product_id.is_none());
    assert!(!options.init_only);
    assert!(!options.validate_sql);
    assert!(options.validate().is_ok());
}

#[test]
fn test_zero_chunk_size_rejected() {
    let options = ConvertOptions {
        chunk_size: 0,
        ..Default::default()
    };
    let err = options.validate().unwrap_err();
    assert!(matches!(err, CoreError::ConfigInvalid { .. }));
    assert!(err.to_string().contains("chunk_size"));
}

#[test]
fn test_blank_product_id_rejected() {
    let options = ConvertOptions {
        product_id: Some("  ".to_string()),
        ..Default::default()
    };
    assert!(options.validate().is_err());
}

#[test]
fn test_chunk_size_of_one_accepted() {
    let options = ConvertOptions {
        chunk_size: 1,
        product_id: Some("sst anomaly".to_string()),
        ..Default::default()
    };
    assert!(options.validate().is_ok());
}
