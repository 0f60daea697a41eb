//! Static event content, one record per [`ConfirmationType`].

use chrono::{DateTime, Datelike, FixedOffset, Timelike};

use crate::domain::{ConfirmationType, Credit};

/// Offset of America/Sao_Paulo, which has not observed DST since 2019.
pub const EVENT_UTC_OFFSET: &str = "-0300";

const MONTHS_PT_BR: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventDetails {
    pub title: &'static str,
    pub location: &'static str,
    pub address: &'static str,
    pub maps_frame: &'static str,
    /// Local calendar date, `YYYY-MM-DD`.
    pub date: &'static str,
    /// Local wall-clock start, `HH:MM:SS`.
    pub time: &'static str,
}

impl EventDetails {
    pub fn starts_at(&self) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
        DateTime::parse_from_str(
            &format!("{}T{}{}", self.date, self.time, EVENT_UTC_OFFSET),
            "%Y-%m-%dT%H:%M:%S%z",
        )
    }

    /// Long pt-BR rendering, e.g. `14 de setembro de 2024 às 18h00`.
    pub fn formatted_date(&self) -> Result<String, chrono::ParseError> {
        let starts_at = self.starts_at()?;
        let month = MONTHS_PT_BR[starts_at.month0() as usize];
        Ok(format!(
            "{} de {month} de {} às {}h{:02}",
            starts_at.day(),
            starts_at.year(),
            starts_at.hour(),
            starts_at.minute()
        ))
    }
}

static FRIENDS: EventDetails = EventDetails {
    title: "Meu Rolê | Carolina Lira",
    location: "na minha primeira casinha",
    address: "R. Prof. Luis Eulálio de Bueno Vidigal, 137 - Centro, Osasco - SP, 06093-085",
    maps_frame: "https://www.google.com/maps/embed?pb=!1m14!1m8!1m3!1d14632.890316887922!2d-46.78829658524168!3d-23.524495629770577!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x94ceff386a16cb4d%3A0x4db8ae004e82ea96!2sBoulevard%20Parque%20Central!5e0!3m2!1spt-BR!2sbr!4v1721879269057!5m2!1spt-BR!2sbr",
    date: "2024-09-14",
    time: "18:00:00",
};

static FAMILY: EventDetails = EventDetails {
    title: "Meu Chá | Carolina Lira",
    location: "na casa da minha Vovó",
    address: "Av. Manoel Pedro Pimentel, 101 - Continental, Osasco - SP, 06020-194 (Salão de Festas)",
    maps_frame: "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3657.9086221268853!2d-46.76459238816308!3d-23.535788778729103!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x94ceff9147b1caf9%3A0x6d01be76c4666f13!2sAv.%20Manoel%20Pedro%20Pimentel%2C%20101%20-%20Continental%2C%20Osasco%20-%20SP%2C%2006020-194!5e0!3m2!1spt-BR!2sbr!4v1722232129489!5m2!1spt-BR!2sbr",
    date: "2024-09-01",
    time: "13:00:00",
};

pub static CREDITS: [Credit; 2] = [
    Credit {
        title: "meu papai",
        social_user: "@alezinlira",
        social_link: "https://www.instagram.com/alezinlira/",
    },
    Credit {
        title: "o tio Gustin",
        social_user: "@agustinhopneto",
        social_link: "https://www.instagram.com/agustinhopneto/",
    },
];

pub const GIFTS_LIST_URL: &str = "https://www.amazon.com.br/baby-reg/amanda-lira-alexsander-lira-novembro-2024-osasco/10OGI99EXGDS8?ref_=cm_sw_r_apin_dp_H0815V8EQ5ABMA0ZGG79&language=en_US";

pub fn event_details(kind: ConfirmationType) -> &'static EventDetails {
    match kind {
        ConfirmationType::Friends => &FRIENDS,
        ConfirmationType::Family => &FAMILY,
    }
}
