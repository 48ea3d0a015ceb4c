// src/team.rs

/// Everything the card shows for one team. Fixed at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamDisplay {
    pub logo_url: &'static str,
    pub middle_color: &'static str, // named or hex
    pub right_color: &'static str,  // hex
    pub name: &'static str,
    pub division: &'static str,
    pub id: &'static str, // opaque, not validated
}

pub const ARIZONA_CARDINALS: TeamDisplay = TeamDisplay {
    logo_url: "https://static.www.nfl.com/t_person_squared_mobile/f_auto/league/api/clubs/logos/ARI",
    middle_color: "black",
    right_color: "#780b38",
    name: "Arizona Cardinals",
    division: "NFC West",
    id: "GNAWS23RDT5UYR",
};

// Must match the var() names in styles.css
pub const MIDDLE_COLOR_VAR: &str = "--middle-color";
pub const RIGHT_COLOR_VAR: &str = "--right-color";

impl TeamDisplay {
    /// Inline style for the wrapper: the two accent colors as CSS custom properties.
    pub fn accent_style(&self) -> String {
        format!(
            "{}: {}; {}: {};",
            MIDDLE_COLOR_VAR, self.middle_color, RIGHT_COLOR_VAR, self.right_color
        )
    }

    /// Detail lines in display order.
    pub fn detail_lines(&self) -> [(&'static str, &'static str); 3] {
        [
            ("name", self.name),
            ("division", self.division),
            ("id", self.id),
        ]
    }
}
