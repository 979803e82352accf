use super::*;

#[test]
fn default_transport_targets_same_origin() {
    let api = GlooObjects::default();
    assert_eq!(api.collection(), "/objects");
    assert_eq!(api.object("abc").unwrap(), "/objects/abc");
}

#[test]
fn explicit_base_is_prefixed() {
    let api = GlooObjects::new("http://192.168.1.10:8080/");
    assert_eq!(api.collection(), "http://192.168.1.10:8080/objects");
    assert_eq!(api.object("7").unwrap(), "http://192.168.1.10:8080/objects/7");
}

#[test]
fn build_env_transport_uses_api_base() {
    assert_eq!(GlooObjects::from_build_env(), GlooObjects::new(API_BASE));
}

#[test]
fn base_is_kept_verbatim() {
    assert_eq!(GlooObjects::new("http://host/").base(), "http://host/");
}

#[test]
fn object_id_is_encoded_as_one_segment() {
    let api = GlooObjects::default();
    assert_eq!(api.object("../admin").unwrap(), "/objects/..%2Fadmin");
    assert!(matches!(api.object(".."), Err(ApiError::InvalidId(_))));
}
