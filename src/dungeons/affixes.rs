//! Keystone affix names.

/// Affix identifiers of the season, as reported by the analytics provider.
static AFFIXES: &[(u32, &str)] = &[
    (3, "Volcanic"),
    (4, "Necrotic"),
    (6, "Raging"),
    (7, "Bolstering"),
    (8, "Sanguine"),
    (9, "Tyrannical"),
    (10, "Fortified"),
    (11, "Bursting"),
    (12, "Grievous"),
    (13, "Explosive"),
    (14, "Quaking"),
    (121, "Prideful"),
    (122, "Inspiring"),
    (123, "Spiteful"),
    (124, "Storming"),
];

pub fn affix_name(id: u32) -> Option<&'static str> {
    AFFIXES
        .iter()
        .find(|(affix_id, _)| *affix_id == id)
        .map(|(_, name)| *name)
}

/// Name of the affix, or the bare identifier when it is unknown.
pub fn affix_label(id: u32) -> String {
    affix_name(id)
        .map(str::to_string)
        .unwrap_or_else(|| id.to_string())
}
