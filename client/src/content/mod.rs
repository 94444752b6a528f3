//! Static invitation content, keyed by language.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sections render straight from these constants. Nothing here is fetched;
//! dynamic content (portraits, gallery, guest panels) comes through `net::api`.

pub mod countdown;
pub mod panels;
pub mod timeline;
pub mod venue;

use crate::i18n::Tr;

// =============================================================================
// LANGUAGE SELECTION
// =============================================================================

pub const INVOCATION: &str = "ఓం శ్రీగణేశాయ నమః";
pub const BLESSINGS: [&str; 3] = ["శ్రీరస్తు", "శుభమస్తు", "అవిఘ్నమస్తు"];
pub const SUBHALEKHA: &str = "Subhalekha";
pub const SITE_TITLE: &str = "Gayathri Kalyanam";
pub const WELCOME: Tr = Tr::new("Welcome", "స్వాగతం");
pub const CHOOSE_LANGUAGE: &str = "Please select your preferred language";
pub const SPLASH_MONOGRAM: &str = "G ❤️ E";

// =============================================================================
// HERO
// =============================================================================

pub const HERO_TITLE: Tr = Tr::new("Gayathri weds Eswar", "గాయత్రి వెడ్స్ ఈశ్వర్");
pub const HERO_TAGLINE: Tr = Tr::new("Together in Love, Forever in Joy", "ప్రేమతో కలిసి, ఆనందంతో ఎప్పటికీ");
pub const HERO_INVITE: Tr = Tr::new("Join us in celebrating our wedding", "మా వివాహ వేడుకలో పాల్గొనండి");
pub const HERO_DATE: Tr = Tr::new("May 15, 2025", "మే 15, 2025");

// =============================================================================
// COUPLE
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: Tr,
    pub parents: Tr,
    pub bio: Tr,
}

pub const BRIDE: Profile = Profile {
    name: Tr::new("Gayathri", "గాయత్రి"),
    parents: Tr::new(
        "D/O K Marneswara Rao & Smt Sujatha",
        "తండ్రి శ్రీ కె మార్నేశ్వర రావు & తల్లి శ్రీమతి సుజాత కుమార్తె",
    ),
    bio: Tr::new(
        "A vibrant UI/UX developer, Gayathri brings elegance and structure to everything she designs, just like she does in life. Deeply devotional and grounded in tradition, she carries forward her values with grace and pride. Her cheerful voice, endless chatter, and ever-radiant smile can light up even the dullest moments. Behind that innocent laugh is a strong woman full of dreams, kindness, and love. She's the kind of soul who makes traditions feel young again.",
        "ప్రతిభావంతమైన UI/UX డెవలపర్ అయిన గాయత్రి, జీవితంలో లాగే తాను డిజైన్ చేసే ప్రతిదానికీ సొగసు మరియు నిర్మాణాత్మకతను జోడిస్తుంది. సంప్రదాయంలో నాటుకుపోయిన ఆధ్యాత్మిక భావన కలిగి, తన విలువలను గర్వంగా ముందుకు తీసుకెళ్తుంది. ఆమె సంతోషకరమైన స్వరం, ఎడతెగని కబుర్లు, మరియు ఎప్పటికీ ప్రకాశవంతమైన చిరునవ్వు నిస్తేజమైన క్షణాలను కూడా వెలిగించగలవు. ఆ అమాయక నవ్వు వెనుక కలలు, దయ, మరియు ప్రేమతో నిండిన బలమైన మహిళ ఉంది. సంప్రదాయాలను మళ్ళీ యవ్వనంగా అనిపించే ఆత్మ ఆమెది.",
    ),
};

pub const GROOM: Profile = Profile {
    name: Tr::new("Eswar", "ఈశ్వర్"),
    parents: Tr::new(
        "S/O T Nookaraju & Smt Krishnaveni",
        "తండ్రి శ్రీ టి నూకరాజు & తల్లి శ్రీమతి కృష్ణవేణి కుమారుడు",
    ),
    bio: Tr::new(
        "An Army Officer by profession, Eswar is a storyteller at heart. Whether he's crafting a plot, flying a drone, building an app, or capturing a sunset through his lens, he pours his soul into it. An author, filmmaker, and AI enthusiast, he walks the rare path of discipline and imagination. With a deep sense of purpose and curiosity, he believes love is best expressed not just through grand gestures, but through shared dreams, conversations, and laughter. A warrior by duty, a creator by choice.",
        "వృత్తిరీత్యా సైనిక అధికారి అయిన ఈశ్వర్, హృదయంలో కథకుడు. కథను అల్లుతూ, డ్రోన్ ఎగురుతూ, యాప్ నిర్మిస్తూ, లేదా తన కెమెరాతో సూర్యాస్తమయాన్ని బంధిస్తూ - ప్రతిదానిలో తన ఆత్మను పోస్తాడు. రచయిత, చలనచిత్ర నిర్మాత, మరియు AI అభిమాని అయిన అతను, క్రమశిక్షణ మరియు ఊహాశక్తి అనే అరుదైన మార్గంలో నడుస్తాడు. ప్రేమ కేవలం గొప్ప సంకేతాల ద్వారా మాత్రమే కాకుండా, పంచుకున్న కలలు, సంభాషణలు మరియు నవ్వుల ద్వారా వ్యక్తమవుతుందని నమ్ముతాడు. విధి చేత యోధుడు, ఎంపిక చేత సృజనకర్త.",
    ),
};

// =============================================================================
// SUMUHURTHAM
// =============================================================================

pub const SUMUHURTHAM_TITLE: Tr = Tr::new("Sumuhurtham", "సుముహుర్తం");
pub const SUMUHURTHAM_INTRO: Tr = Tr::new(
    "Listen to the auspicious time and details of our wedding ceremony",
    "మా వివాహ వేడుక యొక్క శుభ సమయం మరియు వివరాలను వినండి",
);
pub const SUMUHURTHAM_CAPTION: Tr = Tr::new("Sumuhurtham Audio", "సుముహుర్తం ఆడియో");
pub const SUMUHURTHAM_AUDIO: &str = "/music/Sumuhurtham.mp3";
pub const BACKGROUND_AUDIO: &str = "/music/background-music.mp3";
pub const BACKGROUND_VOLUME: f64 = 0.3;

// =============================================================================
// CONTACTS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Contact {
    pub name: &'static str,
    pub phone: &'static str,
}

pub const SUPPORT_TITLE: Tr = Tr::new("Guest Support", "అతిథి సహాయం");
pub const GROOM_SIDE: Tr = Tr::new("Groom Side", "వరుని వైపు");
pub const BRIDE_SIDE: Tr = Tr::new("Bride Side", "వధువు వైపు");

pub const GROOM_CONTACTS: [Contact; 3] = [
    Contact { name: "T Sridhar", phone: "7013045623" },
    Contact { name: "T Sathish", phone: "8790077888" },
    Contact { name: "P Purnesh", phone: "9493944844" },
];

pub const BRIDE_CONTACTS: [Contact; 2] = [
    Contact { name: "K Balaram", phone: "9502558616" },
    Contact { name: "P Surya", phone: "8699474565" },
];

pub const FOOTER: &str = "Designed By Gayathri & Eswar ❤️";

/// `tel:` link for a contact number.
pub fn tel_href(phone: &str) -> String {
    format!("tel:{phone}")
}

// =============================================================================
// CHROME
// =============================================================================

pub const BACK: Tr = Tr::new("Back", "వెనుకకు");
pub const MENU: Tr = Tr::new("Menu", "మెను");
pub const PLAY_MUSIC: Tr = Tr::new("Play music", "సంగీతం ప్లే చేయండి");
pub const SCROLL_TOP: Tr = Tr::new("Back to top", "పైకి వెళ్ళండి");
pub const PAUSE_MUSIC: Tr = Tr::new("Pause music", "సంగీతం ఆపండి");
