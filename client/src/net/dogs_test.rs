use super::*;

#[test]
fn breeds_endpoint_includes_limit() {
    let dogs = DogApiClient::new("https://api.thedogapi.com/v1", None);
    assert_eq!(dogs.breeds_endpoint(10), "https://api.thedogapi.com/v1/breeds?limit=10");
}

#[test]
fn from_config_copies_base_url_and_key() {
    let config = ClientConfig {
        dog_api_base_url: "https://dogs.example.test/v1/".to_owned(),
        dog_api_key: Some("k-1".to_owned()),
        ..ClientConfig::default()
    };
    let dogs = DogApiClient::from_config(&config);
    assert_eq!(dogs, DogApiClient::new("https://dogs.example.test/v1/", Some("k-1".to_owned())));
    assert_eq!(dogs.breeds_endpoint(3), "https://dogs.example.test/v1/breeds?limit=3");
}
