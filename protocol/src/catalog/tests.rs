#[cfg(test)]
mod tests {
    use crate::{ParseError, id_from_resource_url, parse_catalog_listing, parse_catalog_record};

    const PIKACHU: &str = r#"{
        "id": 25,
        "name": "pikachu",
        "base_experience": 112,
        "stats": [
            {"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": ""}},
            {"base_stat": 55, "effort": 0, "stat": {"name": "attack", "url": ""}},
            {"base_stat": 40, "effort": 0, "stat": {"name": "defense", "url": ""}},
            {"base_stat": 50, "effort": 0, "stat": {"name": "special-attack", "url": ""}},
            {"base_stat": 50, "effort": 0, "stat": {"name": "special-defense", "url": ""}},
            {"base_stat": 90, "effort": 2, "stat": {"name": "speed", "url": ""}}
        ],
        "types": [{"slot": 1, "type": {"name": "electric", "url": ""}}],
        "sprites": {
            "front_default": "front.png",
            "other": {"official-artwork": {"front_default": "official.png"}}
        }
    }"#;

    #[test]
    fn test_parse_record() {
        let record = parse_catalog_record(PIKACHU).unwrap();

        assert_eq!(record.id, 25);
        assert_eq!(record.name, "pikachu");
        assert_eq!(record.base_stat("hp"), Some(35));
        assert_eq!(record.base_stat("speed"), Some(90));
        assert_eq!(record.base_stat("luck"), None);
        assert_eq!(record.type_names(), vec!["electric"]);
        assert_eq!(record.artwork(), Some("official.png"));
    }

    #[test]
    fn test_artwork_falls_back_to_sprite() {
        let body = r#"{"id": 1, "name": "bulbasaur", "sprites": {"front_default": "front.png", "other": {}}}"#;
        let record = parse_catalog_record(body).unwrap();
        assert_eq!(record.artwork(), Some("front.png"));

        let body = r#"{"id": 1, "name": "bulbasaur"}"#;
        let record = parse_catalog_record(body).unwrap();
        assert_eq!(record.artwork(), None);
    }

    #[test]
    fn test_type_names_follow_slot_order() {
        let body = r#"{"id": 6, "name": "charizard", "types": [
            {"slot": 2, "type": {"name": "flying"}},
            {"slot": 1, "type": {"name": "fire"}}
        ]}"#;
        let record = parse_catalog_record(body).unwrap();
        assert_eq!(record.type_names(), vec!["fire", "flying"]);
    }

    #[test]
    fn test_parse_record_invalid() {
        assert!(matches!(parse_catalog_record("   "), Err(ParseError::EmptyPayload)));
        assert!(matches!(parse_catalog_record("{"), Err(ParseError::Json(_))));
        assert!(matches!(
            parse_catalog_record(r#"{"id": 1, "name": ""}"#),
            Err(ParseError::MissingField(_))
        ));
    }

    #[test]
    fn test_parse_listing() {
        let body = r#"{
            "count": 1302,
            "next": "https://pokeapi.co/api/v2/pokemon?offset=20&limit=10",
            "previous": null,
            "results": [
                {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"},
                {"name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/"}
            ]
        }"#;
        let listing = parse_catalog_listing(body).unwrap();

        assert_eq!(listing.count, 1302);
        assert!(listing.previous.is_none());
        assert_eq!(listing.results.len(), 2);
        assert_eq!(listing.results[1].name, "ivysaur");
    }

    #[test]
    fn test_id_from_resource_url() {
        assert_eq!(id_from_resource_url("https://pokeapi.co/api/v2/pokemon/25/"), Some(25));
        assert_eq!(id_from_resource_url("https://pokeapi.co/api/v2/pokemon/151"), Some(151));
        assert_eq!(id_from_resource_url("https://pokeapi.co/api/v2/pokemon/"), None);
        assert_eq!(id_from_resource_url(""), None);
    }
}
