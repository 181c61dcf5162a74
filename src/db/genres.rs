use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

/// Genre tags stored as a JSON-encoded list.
///
/// Values round-trip verbatim, so a genre containing a comma (or any
/// other delimiter) is preserved as a single tag.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct GenreList(pub Vec<String>);

impl GenreList {
    pub fn new(genres: Vec<String>) -> Self {
        Self(genres)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for GenreList {
    fn from(genres: Vec<String>) -> Self {
        Self(genres)
    }
}

impl<'a> IntoIterator for &'a GenreList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genre_with_delimiter_survives_round_trip() {
        let genres = GenreList::new(vec![
            "Rock n Roll".to_string(),
            "Drum, Bass & Beyond".to_string(),
        ]);

        let encoded = serde_json::to_string(&genres).unwrap();
        let decoded: GenreList = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded, genres);
        assert_eq!(decoded.0.len(), 2);
    }
}
