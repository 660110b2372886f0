/// Official English holiday names and their French display names.
pub const TRANSLATIONS: [(&str, &str); 10] = [
    ("New year", "Nouvel an"),
    ("Easter Monday", "Lundi de Pâques"),
    ("Labour Day", "Fête du travail"),
    ("Ascension Thursday", "Jeudi de l'Ascension"),
    ("Whit Monday", "Lundi de Pentecôte"),
    ("National Day", "Fête nationale"),
    ("Assumption of Mary to Heaven", "Assomption"),
    ("All Saints Day", "Toussaint"),
    ("Armistice of 1918", "Armistice (1918)"),
    ("Christmas Day", "Noël"),
];

/// Display name for an official holiday name; unknown names pass through.
pub fn translate(name: &str) -> &str {
    TRANSLATIONS
        .iter()
        .find(|(official, _)| *official == name)
        .map_or(name, |(_, display)| *display)
}
