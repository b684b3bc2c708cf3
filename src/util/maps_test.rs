use super::*;

#[test]
fn encode_passes_unreserved_characters_through() {
    assert_eq!(encode_uri_component("Colombo-07_x.~*'()!"), "Colombo-07_x.~*'()!");
}

#[test]
fn encode_escapes_spaces_and_commas() {
    assert_eq!(
        encode_uri_component("123 Galle Road, Colombo 07"),
        "123%20Galle%20Road%2C%20Colombo%2007"
    );
}

#[test]
fn encode_escapes_multibyte_utf8_per_byte() {
    assert_eq!(encode_uri_component("café"), "caf%C3%A9");
}

#[test]
fn maps_url_embeds_the_encoded_address() {
    assert_eq!(
        maps_search_url("45 Beach Road, Negombo"),
        "https://www.google.com/maps/search/?api=1&query=45%20Beach%20Road%2C%20Negombo"
    );
}

#[test]
fn maps_url_for_empty_address_has_empty_query() {
    assert_eq!(maps_search_url(""), "https://www.google.com/maps/search/?api=1&query=");
}
