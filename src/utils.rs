// SPDX-License-Identifier: GPL-3.0-only

/// Base URL of the PokeAPI sprite repository, official front sprite per Pokémon id.
const SPRITE_BASE_URL: &str = "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";

/// Transforms a kebab-case string into a space-separated string where each word starts with an uppercase letter.
pub fn capitalize_string(input: &str) -> String {
    let words: Vec<&str> = input.split('-').collect();

    let capitalized_words: Vec<String> = words
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            if let Some(first_char) = chars.next() {
                first_char.to_uppercase().collect::<String>() + chars.as_str()
            } else {
                String::new()
            }
        })
        .collect();

    capitalized_words.join(" ")
}

/// Extracts the numeric id of a PokéApi resource url, the last non-empty path segment
/// (`https://pokeapi.co/api/v2/pokemon/25/` -> `25`).
pub fn id_from_resource_url(url: &str) -> Option<i64> {
    url.split('/')
        .filter(|segment| !segment.is_empty())
        .next_back()?
        .parse()
        .ok()
}

/// Builds the image url for the given Pokémon id
pub fn sprite_url(id: i64) -> String {
    format!("{SPRITE_BASE_URL}/{id}.png")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_kebab_case() {
        assert_eq!(capitalize_string("mr-mime"), "Mr Mime");
        assert_eq!(capitalize_string("pikachu"), "Pikachu");
        assert_eq!(capitalize_string(""), "");
    }

    #[test]
    fn parses_id_with_trailing_slash() {
        assert_eq!(
            id_from_resource_url("https://pokeapi.co/api/v2/pokemon/25/"),
            Some(25)
        );
        assert_eq!(
            id_from_resource_url("https://pokeapi.co/api/v2/pokemon/10001"),
            Some(10001)
        );
    }

    #[test]
    fn rejects_urls_without_numeric_tail() {
        assert_eq!(id_from_resource_url("https://pokeapi.co/api/v2/pokemon/"), None);
        assert_eq!(id_from_resource_url(""), None);
        assert_eq!(id_from_resource_url("///"), None);
    }

    #[test]
    fn builds_sprite_url_from_id() {
        assert_eq!(
            sprite_url(1),
            "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/1.png"
        );
    }
}
