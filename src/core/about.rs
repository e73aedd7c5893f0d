//! Static organization content for the about and contact screens

use std::fmt::Write;

/// A training venue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Venue {
    /// Venue name
    pub name: &'static str,
    /// Street address
    pub address: &'static str,
}

/// Organization details shown on the about screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct About {
    /// Organization name
    pub name: &'static str,
    /// Mission statement
    pub mission: &'static str,
    /// Background paragraph
    pub background: &'static str,
    /// Contact phone number
    pub phone: &'static str,
    /// Contact email
    pub email: &'static str,
    /// Where courses are taught
    pub venues: &'static [Venue],
}

/// The organization's about page
pub const ABOUT: About = About {
    name: "Empowering the Nation",
    mission: "Upskilling domestic workers and gardeners so they can earn more \
              and start their own small businesses.",
    background: "Established in 2018, Empowering the Nation offers six-month \
                 learnerships and six-week short skills courses in Johannesburg.",
    phone: "+27 11 123 4567",
    email: "info@empoweringthenation.co.za",
    venues: &[
        Venue {
            name: "Rosebank",
            address: "12 Tyrwhitt Avenue, Rosebank, Johannesburg",
        },
        Venue {
            name: "Sandton",
            address: "45 Rivonia Road, Sandton, Johannesburg",
        },
        Venue {
            name: "Soweto",
            address: "8 Vilakazi Street, Orlando West, Soweto",
        },
    ],
};

impl About {
    /// Render as plain text for the terminal
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = format!(
            "{}\n\n{}\n\n{}\n\nPhone: {}\nEmail: {}\n\nVenues:\n",
            self.name, self.mission, self.background, self.phone, self.email
        );
        for venue in self.venues {
            let _ = writeln!(out, "  - {}: {}", venue.name, venue.address);
        }
        out
    }
}
