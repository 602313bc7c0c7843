use skybook_core::flight::Airport;

fn airport(code: &str, name: &str, city: &str) -> Airport {
    Airport {
        code: code.to_string(),
        name: name.to_string(),
        city: city.to_string(),
    }
}

/// The airport directory backing the search form's typeahead.
pub fn airport_directory() -> Vec<Airport> {
    vec![
        airport("CGK", "Soekarno-Hatta International Airport", "Jakarta"),
        airport("DPS", "Ngurah Rai International Airport", "Bali"),
        airport("SUB", "Juanda International Airport", "Surabaya"),
        airport("SIN", "Changi Airport", "Singapore"),
        airport("KUL", "Kuala Lumpur International Airport", "Kuala Lumpur"),
    ]
}

/// Case-insensitive substring match against code, name, or city. An empty
/// query matches everything, like the form's dropdown before any input.
pub fn search_airports<'a>(directory: &'a [Airport], query: &str) -> Vec<&'a Airport> {
    let needle = query.to_lowercase();
    directory
        .iter()
        .filter(|a| {
            a.city.to_lowercase().contains(&needle)
                || a.code.to_lowercase().contains(&needle)
                || a.name.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_by_code_city_or_name() {
        let directory = airport_directory();

        let by_code = search_airports(&directory, "dps");
        assert_eq!(by_code.len(), 1);
        assert_eq!(by_code[0].city, "Bali");

        let by_city = search_airports(&directory, "jakarta");
        assert_eq!(by_city.len(), 1);
        assert_eq!(by_city[0].code, "CGK");

        let by_name = search_airports(&directory, "changi");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].code, "SIN");
    }

    #[test]
    fn empty_query_returns_full_directory() {
        let directory = airport_directory();
        assert_eq!(search_airports(&directory, "").len(), directory.len());
    }

    #[test]
    fn unknown_query_returns_nothing() {
        let directory = airport_directory();
        assert!(search_airports(&directory, "zzz").is_empty());
    }
}
