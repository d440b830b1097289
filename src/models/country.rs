use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Country derived from the channels dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub code: String,
    pub name: String,
    pub flag: String,
}

/// Countries always listed ahead of the rest
pub const POPULAR_COUNTRY_CODES: [&str; 8] = ["ES", "MX", "AR", "CO", "US", "PE", "CL", "VE"];

pub fn is_popular_country(code: &str) -> bool {
    POPULAR_COUNTRY_CODES.contains(&code)
}

lazy_static! {
    /// Spanish display names by ISO 3166-1 alpha-2 code
    pub static ref COUNTRY_NAMES: HashMap<&'static str, &'static str> = HashMap::from([
        ("US", "Estados Unidos"),
        ("ES", "España"),
        ("MX", "México"),
        ("AR", "Argentina"),
        ("CO", "Colombia"),
        ("PE", "Perú"),
        ("CL", "Chile"),
        ("VE", "Venezuela"),
        ("EC", "Ecuador"),
        ("GT", "Guatemala"),
        ("CU", "Cuba"),
        ("BO", "Bolivia"),
        ("DO", "República Dominicana"),
        ("HN", "Honduras"),
        ("PY", "Paraguay"),
        ("SV", "El Salvador"),
        ("NI", "Nicaragua"),
        ("CR", "Costa Rica"),
        ("PA", "Panamá"),
        ("UY", "Uruguay"),
        ("PR", "Puerto Rico"),
        ("FR", "Francia"),
        ("DE", "Alemania"),
        ("IT", "Italia"),
        ("GB", "Reino Unido"),
        ("UK", "Reino Unido"),
        ("PT", "Portugal"),
        ("BR", "Brasil"),
        ("JP", "Japón"),
        ("CN", "China"),
        ("KR", "Corea del Sur"),
        ("IN", "India"),
        ("RU", "Rusia"),
        ("CA", "Canadá"),
        ("AU", "Australia"),
        ("NL", "Países Bajos"),
        ("BE", "Bélgica"),
        ("CH", "Suiza"),
        ("AT", "Austria"),
        ("PL", "Polonia"),
        ("SE", "Suecia"),
        ("NO", "Noruega"),
        ("DK", "Dinamarca"),
        ("FI", "Finlandia"),
        ("IE", "Irlanda"),
        ("GR", "Grecia"),
        ("TR", "Turquía"),
        ("EG", "Egipto"),
        ("ZA", "Sudáfrica"),
        ("AE", "Emiratos Árabes"),
        ("SA", "Arabia Saudita"),
        ("IL", "Israel"),
        ("PH", "Filipinas"),
        ("TH", "Tailandia"),
        ("VN", "Vietnam"),
        ("ID", "Indonesia"),
        ("MY", "Malasia"),
        ("SG", "Singapur"),
        ("NZ", "Nueva Zelanda"),
        ("RO", "Rumania"),
        ("HU", "Hungría"),
        ("CZ", "República Checa"),
        ("SK", "Eslovaquia"),
        ("BG", "Bulgaria"),
        ("HR", "Croacia"),
        ("RS", "Serbia"),
        ("UA", "Ucrania"),
        ("BY", "Bielorrusia"),
    ]);
}
