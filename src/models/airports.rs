/// Airports served for transfers. The widget only offers the Paris region;
/// the catalog does not currently expose this list, so it ships with the
/// client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Airport {
    pub id: &'static str,
    pub code: &'static str,
    pub name: &'static str,
}

pub const AIRPORTS: [Airport; 3] = [
    Airport {
        id: "cdg",
        code: "CDG",
        name: "Charles de Gaulle Airport (CDG)",
    },
    Airport {
        id: "ory",
        code: "ORY",
        name: "Orly Airport (ORY)",
    },
    Airport {
        id: "lbg",
        code: "LBG",
        name: "Le Bourget Airport (LBG)",
    },
];

pub fn airport_by_id(id: &str) -> Option<&'static Airport> {
    AIRPORTS.iter().find(|airport| airport.id == id)
}
