//! Venue details, map embed, and directions.

#[cfg(test)]
#[path = "venue_test.rs"]
mod venue_test;

use crate::i18n::Tr;

pub const VENUE_LAT: f64 = 17.491_989_220_058_25;
pub const VENUE_LNG: f64 = 82.731_596_112_342_03;
pub const DIRECTIONS_URL: &str = "https://maps.app.goo.gl/Ji18Ef2JS2VcNEGX7";
const MAP_ZOOM: u8 = 17;

pub const TITLE: Tr = Tr::new("Wedding Venue", "వివాహ వేదిక");
pub const DATE: Tr = Tr::new("15th May 2025", "మే 15, 2025");
pub const TIME: Tr = Tr::new("7:00 PM onwards", "సాయంత్రం 7:00 గంటల నుండి");
pub const NAME: Tr = Tr::new("Sri Kalyana Venkateswara Swamy Temple", "శ్రీ కల్యాణ వేంకటేశ్వర స్వామి దేవాలయం");
pub const ADDRESS: Tr = Tr::new(
    "Darlapudi, S. Rayavaram Mandal, Vizag District, Andhra Pradesh 531082",
    "దార్లపూడి, ఎస్. రాయవరం మండలం, విశాఖపట్నం జిల్లా, ఆంధ్ర ప్రదేశ్ 531082",
);
pub const DESCRIPTION: Tr = Tr::new(
    "Join us for the traditional Telugu wedding ceremony followed by dinner.",
    "సాంప్రదాయ తెలుగు వివాహ వేడుకకు మరియు విందుకు మిమ్మల్ని ఆహ్వానిస్తున్నాము.",
);
pub const GET_DIRECTIONS: Tr = Tr::new("Get Directions", "దిశలు పొందండి");
pub const COPY_LOCATION: Tr = Tr::new("Copy Location", "స్థానాన్ని కాపీ చేయండి");
pub const COPIED: Tr = Tr::new("Location URL copied!", "స్థానం లింక్ కాపీ అయింది!");

/// Google Maps embed URL centred on the venue, or `None` without a key.
pub fn map_embed_url(key: Option<&str>) -> Option<String> {
    let key = key.map(str::trim).filter(|k| !k.is_empty())?;
    Some(format!(
        "https://www.google.com/maps/embed/v1/place?key={key}&q={VENUE_LAT},{VENUE_LNG}&zoom={MAP_ZOOM}&maptype=satellite"
    ))
}
