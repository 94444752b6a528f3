//! Labels for the guest panels and the curated gallery.

use crate::i18n::Tr;

pub mod messages {
    use super::Tr;

    pub const TITLE: Tr = Tr::new("Leave Your Blessings", "మీ ఆశీర్వాదాలను పంచుకోండి");
    pub const NAME: Tr = Tr::new("Your Name", "మీ పేరు");
    pub const PLACEHOLDER: Tr = Tr::new("Write your message...", "మీ సందేశాన్ని రాయండి...");
    pub const SUBMIT: Tr = Tr::new("Send Message", "సందేశం పంపండి");
    pub const LOADING: Tr = Tr::new("Loading messages...", "సందేశాలు లోడ్ అవుతున్నాయి...");
    pub const SUCCESS: Tr = Tr::new("Message sent successfully!", "సందేశం విజయవంతంగా పంపబడింది!");
    pub const ERROR: Tr = Tr::new("Error sending message", "సందేశం పంపడంలో లోపం");
    pub const EMPTY: Tr = Tr::new("Be the first to leave your blessings!", "మొదటి ఆశీర్వాదాన్ని ఇవ్వండి!");
}

pub mod photos {
    use super::Tr;

    pub const TITLE: Tr = Tr::new("Share Your Moments", "మీ క్షణాలను పంచుకోండి");
    pub const DESCRIPTION: Tr = Tr::new(
        "Share your captured moments from our wedding celebration. Your photos will help us cherish these memories forever.",
        "మా వివాహ వేడుకలో మీరు చిత్రీకరించిన క్షణాలను పంచుకోండి. మీ ఫోటోలు ఈ జ్ఞాపకాలను శాశ్వతంగా నిలుపుతాయి.",
    );
    pub const UPLOAD: Tr = Tr::new("Upload Photo", "ఫోటో అప్‌లోడ్ చేయండి");
    pub const CAPTION: Tr = Tr::new("Add a caption", "క్యాప్షన్ జోడించండి");
    pub const UPLOADED_BY: Tr = Tr::new("Your Name", "మీ పేరు");
    pub const CREDIT: Tr = Tr::new("Uploaded by", "అప్‌లోడ్ చేసినవారు");
    pub const UPLOADING: Tr = Tr::new("Uploading...", "అప్‌లోడ్ అవుతోంది...");
    pub const SUCCESS: Tr = Tr::new("Photo uploaded successfully!", "ఫోటో విజయవంతంగా అప్‌లోడ్ చేయబడింది!");
    pub const ERROR: Tr = Tr::new("Error uploading photo", "ఫోటో అప్‌లోడ్‌లో లోపం");
    pub const EMPTY: Tr = Tr::new("Be the first to share your photos!", "మీ ఫోటోలను మొదటగా పంచుకోండి!");
    pub const ALT: Tr = Tr::new("Wedding photo", "వివాహ ఫోటో");
}

pub mod rsvp {
    use super::Tr;

    pub const TITLE: Tr = Tr::new("RSVP", "హాజరు నిర్ధారణ");
    pub const INTRO: Tr = Tr::new(
        "Please let us know if you will be joining us on our special day.",
        "దయచేసి మా ప్రత్యేక రోజున మీరు మాతో చేరుతున్నారో లేదో మాకు తెలియజేయండి.",
    );
    pub const NAME: Tr = Tr::new("Your Name", "మీ పేరు");
    pub const SIDE: Tr = Tr::new("Attending from", "నుండి హాజరవుతున్నారు");
    pub const BRIDE: Tr = Tr::new("Bride Side", "పెళ్లి కుమార్తె వైపు");
    pub const GROOM: Tr = Tr::new("Groom Side", "పెళ్లి కుమారుడి వైపు");
    pub const LOCATION: Tr = Tr::new("Coming from (City/Town)", "వచ్చే ప్రదేశం (నగరం/పట్టణం)");
    pub const ATTENDING: Tr = Tr::new("Will you be attending?", "మీరు హాజరవుతారా?");
    pub const YES: Tr = Tr::new("Yes, I will attend", "అవును, నేను హాజరవుతాను");
    pub const NO: Tr = Tr::new("Sorry, I cannot attend", "క్షమించండి, నేను హాజరు కాలేను");
    pub const GUESTS: Tr = Tr::new("Number of Additional Guests", "అదనపు అతిథుల సంఖ్య");
    pub const REQUIREMENTS: Tr = Tr::new("Any Requirements", "ఆహార అవసరాలు");
    pub const GUEST_ROOM: Tr = Tr::new("Do you need guest room accommodation?", "మీకు అతిథి గది వసతి అవసరమా?");
    pub const SUBMIT: Tr = Tr::new("Submit RSVP", "సమర్పించండి");
    pub const SUBMITTING: Tr = Tr::new("Submitting...", "సమర్పిస్తోంది...");
    pub const SUCCESS: Tr = Tr::new("Thank you for your response!", "మీ స్పందనకు ధన్యవాదాలు!");
    pub const ERROR: Tr = Tr::new("Error submitting RSVP", "సమర్పించడంలో లోపం");
}

pub mod gallery {
    use super::Tr;

    pub const TITLE: Tr = Tr::new("Our Gallery", "మా గ్యాలరీ");
    pub const LOADING: Tr = Tr::new("Loading...", "లోడ్ అవుతోంది...");
}
