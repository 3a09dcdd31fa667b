//! Naming utilities for code generation

/// Convert a snake_case database identifier to an exported Go identifier.
///
/// Splits on `_`, uppercases the first letter of every segment and joins the
/// segments; the rest of each segment is kept as is (`user_id` -> `UserId`,
/// `userID` -> `UserID`). A result that is empty or does not start with a
/// letter gets an `X` prefix.
pub fn to_go_identifier(name: &str) -> String {
    let ident: String = name.split('_').map(capitalize).collect();

    match ident.chars().next() {
        Some(first) if first.is_alphabetic() => ident,
        _ => format!("X{}", ident),
    }
}

/// Convert a column name to a struct field name
pub fn to_field_name(column_name: &str) -> String {
    to_go_identifier(column_name)
}

/// Convert a table name to the generated type name (singular, PascalCase)
/// e.g., "order_items" -> "OrderItem"
pub fn to_type_name(table_name: &str) -> String {
    to_go_identifier(&singularize(table_name))
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Words that have no distinct singular form
const UNCOUNTABLES: &[&str] = &[
    "equipment",
    "information",
    "rice",
    "money",
    "species",
    "series",
    "fish",
    "sheep",
    "deer",
    "news",
    "data",
    "metadata",
    "media",
    "feedback",
    "software",
    "staff",
    "police",
    "jeans",
    "gas",
];

/// Irregular plurals (common in database contexts), matched as whole words
const IRREGULARS: &[(&str, &str)] = &[
    ("people", "person"),
    ("children", "child"),
    ("men", "man"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
    ("mice", "mouse"),
    ("oxen", "ox"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("vertices", "vertex"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("quizzes", "quiz"),
    ("buses", "bus"),
    ("gases", "gas"),
    ("axes", "axis"),
    ("movies", "movie"),
    ("cookies", "cookie"),
    ("zombies", "zombie"),
];

/// Compounds of "man", matched as suffixes (salesmen, saleswomen)
const MAN_COMPOUNDS: &[&str] = &[
    "women",
    "salesmen",
    "chairmen",
    "firemen",
    "policemen",
    "gentlemen",
    "businessmen",
    "craftsmen",
    "workmen",
    "spokesmen",
    "foremen",
];

/// Singular words ending in -s, pluralized with -es
const ES_PLURAL_STEMS: &[&str] = &[
    "status", "bonus", "virus", "campus", "census", "focus", "alias", "canvas", "atlas", "bias",
];

/// Plurals of singular words that end in -u or -i
const US_IS_PLURALS: &[&str] = &[
    "menus", "emus", "gnus", "haikus", "tutus", "tofus", "taxis", "skis", "kiwis", "emojis",
    "wikis", "safaris", "bikinis", "alibis",
];

/// Reduce a plural table name to its singular form.
///
/// Only the last `_`-separated word is inflected (`order_items` ->
/// `order_item`). Uppercase input is matched case-insensitively and the
/// original casing of the untouched prefix is kept.
pub fn singularize(name: &str) -> String {
    let split = name.rfind('_').map(|i| i + 1).unwrap_or(0);
    let (prefix, word) = name.split_at(split);
    format!("{}{}", prefix, singularize_word(word))
}

fn singularize_word(word: &str) -> String {
    if word.is_empty() || !word.is_ascii() {
        return word.to_string();
    }

    let lower = word.to_ascii_lowercase();
    let keep = |suffix_len: usize| word[..word.len() - suffix_len].to_string();

    if UNCOUNTABLES.contains(&lower.as_str()) {
        return word.to_string();
    }

    for (plural, singular) in IRREGULARS {
        if lower == *plural {
            return singular.to_string();
        }
    }

    for &compound in MAN_COMPOUNDS {
        if lower.ends_with(compound) {
            return format!("{}an", keep(2));
        }
    }

    // Singular forms ending in -s take -es (statuses → status)
    for &sword in ES_PLURAL_STEMS {
        if lower.ends_with(sword) {
            return word.to_string();
        }
        if lower.ends_with(&format!("{}es", sword)) {
            return keep(2);
        }
    }

    // Words ending in -ies → -y (categories → category)
    if lower.ends_with("ies") && lower.len() > 4 {
        return format!("{}y", keep(3));
    }

    // Words ending in -ves → -f / -fe (leaves → leaf, knives → knife)
    let ves_to_fe: &[&str] = &["knives", "wives", "lives"];
    if ves_to_fe.contains(&lower.as_str()) {
        return format!("{}fe", keep(3));
    }
    let ves_to_f: &[&str] = &[
        "leaves", "shelves", "selves", "halves", "calves", "loaves", "thieves", "wolves",
    ];
    for &fword in ves_to_f {
        if lower.ends_with(fword) {
            return format!("{}f", keep(3));
        }
    }

    // Words ending in -ses from -sis (analyses → analysis)
    let ses_to_sis: &[&str] = &["analyses", "crises", "diagnoses", "theses", "synopses"];
    for &sword in ses_to_sis {
        if lower.ends_with(sword) {
            return format!("{}is", keep(2));
        }
    }

    // Words ending in -oes (heroes → hero)
    let oes_to_o: &[&str] = &["heroes", "potatoes", "tomatoes", "echoes", "vetoes"];
    if oes_to_o.contains(&lower.as_str()) {
        return keep(2);
    }

    // -xes, -ches, -shes, -sses → drop -es
    if lower.ends_with("xes")
        || lower.ends_with("ches")
        || lower.ends_with("shes")
        || lower.ends_with("sses")
    {
        return keep(2);
    }

    // menus → menu, taxis → taxi
    for &plural in US_IS_PLURALS {
        if lower.ends_with(plural) {
            return keep(1);
        }
    }

    // Words that already look singular (address, bus, corpus, axis)
    if lower.ends_with("ss") || lower.ends_with("us") || lower.ends_with("is") {
        return word.to_string();
    }

    // Default: strip a trailing -s
    if lower.ends_with('s') && lower.len() > 1 {
        return keep(1);
    }

    word.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_field_name() {
        assert_eq!(to_field_name("id"), "Id");
        assert_eq!(to_field_name("user_id"), "UserId");
        assert_eq!(to_field_name("order_item_id"), "OrderItemId");
        assert_eq!(to_field_name("created_at"), "CreatedAt");
        // Only the first letter of each segment changes
        assert_eq!(to_field_name("userID"), "UserID");
    }

    #[test]
    fn test_to_field_name_is_idempotent() {
        for name in ["Id", "Email", "CreatedAt", "OrderItemId"] {
            assert_eq!(to_field_name(name), name);
            assert_eq!(to_field_name(&to_field_name(name)), name);
        }
        let once = to_field_name("order_item_id");
        assert_eq!(to_field_name(&once), once);
    }

    #[test]
    fn test_to_field_name_never_empty() {
        assert_eq!(to_field_name("_"), "X");
        assert_eq!(to_field_name("__"), "X");
        assert_eq!(to_field_name("_id"), "Id");
        assert_eq!(to_field_name("1st_place"), "X1stPlace");
    }

    #[test]
    fn test_to_type_name() {
        assert_eq!(to_type_name("users"), "User");
        assert_eq!(to_type_name("categories"), "Category");
        assert_eq!(to_type_name("order_items"), "OrderItem");
        assert_eq!(to_type_name("children"), "Child");
        assert_eq!(to_type_name("people"), "Person");
        assert_eq!(to_type_name("user_settings"), "UserSetting");
        assert_eq!(to_type_name("news"), "News");
    }

    #[test]
    fn test_to_type_name_never_empty() {
        for table in ["s", "_", "ies", "users_", "a", "_s", "x_y_z"] {
            assert!(!to_type_name(table).is_empty(), "empty name for {:?}", table);
        }
    }

    #[test]
    fn test_singularize() {
        // Basic -s
        assert_eq!(singularize("users"), "user");
        assert_eq!(singularize("emails"), "email");
        assert_eq!(singularize("products"), "product");

        // -es for -x, -ch, -sh, -ss
        assert_eq!(singularize("boxes"), "box");
        assert_eq!(singularize("matches"), "match");
        assert_eq!(singularize("dishes"), "dish");
        assert_eq!(singularize("addresses"), "address");
        assert_eq!(singularize("statuses"), "status");
        assert_eq!(singularize("aliases"), "alias");
        assert_eq!(singularize("buses"), "bus");

        // -ies → -y
        assert_eq!(singularize("categories"), "category");
        assert_eq!(singularize("companies"), "company");
        // vowel + y only takes -s
        assert_eq!(singularize("keys"), "key");
        assert_eq!(singularize("days"), "day");

        // -ses → -sis
        assert_eq!(singularize("analyses"), "analysis");

        // -ves → -f/-fe
        assert_eq!(singularize("leaves"), "leaf");
        assert_eq!(singularize("knives"), "knife");

        // Irregulars
        assert_eq!(singularize("people"), "person");
        assert_eq!(singularize("children"), "child");
        assert_eq!(singularize("indices"), "index");
        assert_eq!(singularize("salesmen"), "salesman");
        assert_eq!(singularize("movies"), "movie");

        // -oes
        assert_eq!(singularize("heroes"), "hero");
        assert_eq!(singularize("photos"), "photo");

        // Uncountable and already singular
        assert_eq!(singularize("sheep"), "sheep");
        assert_eq!(singularize("metadata"), "metadata");
        assert_eq!(singularize("status"), "status");
        assert_eq!(singularize("address"), "address");
        assert_eq!(singularize("user"), "user");
        assert_eq!(singularize("menus"), "menu");
        assert_eq!(singularize("houses"), "house");
        assert_eq!(singularize("databases"), "database");
        assert_eq!(singularize("ties"), "tie");
    }

    #[test]
    fn test_singularize_keeps_singular_words() {
        for word in [
            "bus", "axis", "status", "campus", "corpus", "radius", "gas", "alias", "tennis",
            "analysis", "address", "specimen", "omen",
        ] {
            assert_eq!(singularize(word), word);
        }
        assert_eq!(to_type_name("bus"), "Bus");
        assert_eq!(to_type_name("corpus"), "Corpus");
        assert_eq!(to_type_name("specimen"), "Specimen");
    }

    #[test]
    fn test_singularize_us_is_plurals() {
        assert_eq!(singularize("axes"), "axis");
        assert_eq!(singularize("gases"), "gas");
        assert_eq!(singularize("campuses"), "campus");
        assert_eq!(singularize("viruses"), "virus");
        assert_eq!(singularize("biases"), "bias");
        assert_eq!(singularize("menus"), "menu");
        assert_eq!(singularize("submenus"), "submenu");
        assert_eq!(singularize("taxis"), "taxi");
        assert_eq!(singularize("emojis"), "emoji");
        assert_eq!(singularize("taxes"), "tax");
    }

    #[test]
    fn test_singularize_man_compounds() {
        assert_eq!(singularize("men"), "man");
        assert_eq!(singularize("women"), "woman");
        assert_eq!(singularize("saleswomen"), "saleswoman");
        assert_eq!(singularize("chairmen"), "chairman");
        assert_eq!(singularize("specimens"), "specimen");
        assert_eq!(to_type_name("sales_men"), "SalesMan");
    }

    #[test]
    fn test_singularize_last_segment_only() {
        assert_eq!(singularize("order_items"), "order_item");
        assert_eq!(singularize("users_roles"), "users_role");
        assert_eq!(singularize("product_categories"), "product_category");
    }

    #[test]
    fn test_singularize_keeps_case() {
        assert_eq!(singularize("Users"), "User");
        assert_eq!(singularize("OrderItems"), "OrderItem");
        assert_eq!(to_type_name("Categories"), "Category");
    }
}
