//! Story and marriage-event timelines.

#[cfg(test)]
#[path = "timeline_test.rs"]
mod timeline_test;

use crate::i18n::Tr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimelineEntry {
    pub date: Tr,
    pub title: Tr,
    pub description: Tr,
}

pub const STORY_TITLE: Tr = Tr::new("Our Story", "మా ప్రేమ కథ");
pub const EVENTS_TITLE: Tr = Tr::new("Marriage Events", "వివాహ వేడుకలు");

pub const STORY: [TimelineEntry; 4] = [
    TimelineEntry {
        date: Tr::new("12th October 2024", "అక్టోబర్ 12, 2024"),
        title: Tr::new("The First Sight", "మొదటి చూపు"),
        description: Tr::new(
            "At a friend's wedding filled with laughter and celebration, Eswar attended his best friend's big day. Little did he know, this wasn't just another wedding. It was the beginning of his own love story.",
            "స్నేహితుని వివాహంలో సంతోషంగా జరుగుతున్న వేడుకలో, ఈశ్వర్ తన స్నేహితుని పెళ్లికి హాజరయ్యాడు. ఇది మరొక పెళ్లి కాదని, ఇది అతని స్వంత ప్రేమ కథ ప్రారంభమని అతనికి తెలియదు.",
        ),
    },
    TimelineEntry {
        date: Tr::new("8th November 2024", "నవంబర్ 8, 2024"),
        title: Tr::new("Pelli Choopulu", "పెళ్లి చూపులు"),
        description: Tr::new(
            "In a beautiful twist of fate, Gayathri's parents noticed Eswar at that wedding. Impressed, they arranged a traditional matchmaking ceremony. From the moment their eyes met, something just clicked: two hearts that felt right, two minds that understood.",
            "అదృష్టవశాత్తు, గాయత్రి తల్లిదండ్రులు ఆ పెళ్లిలో ఈశ్వర్‌ని గమనించారు. ఆకట్టుకున్న వారు సాంప్రదాయ పెళ్లి చూపులు ఏర్పాటు చేశారు. వారి కళ్ళు కలిసిన క్షణం నుండి, ఏదో కుదిరినట్లు అనిపించింది. రెండు హృదయాలు సరిపోయాయి, రెండు మనసులు అర్థం చేసుకున్నాయి.",
        ),
    },
    TimelineEntry {
        date: Tr::new("12th March 2025", "మార్చి 12, 2025"),
        title: Tr::new("Engagement Ceremony", "నిశ్చితార్థం"),
        description: Tr::new(
            "A beautiful ceremony where we officially promised ourselves to each other, exchanging rings and blessings from our families. It was a day filled with joy, marking the beginning of our journey towards marriage.",
            "ఉంగరాలు మార్చుకుని, మా కుటుంబాల ఆశీర్వాదాలతో ఒకరికొకరం అధికారికంగా మాట ఇచ్చుకున్న అందమైన వేడుక. మా వివాహ ప్రయాణానికి నాంది పలికిన ఆనందభరితమైన రోజు.",
        ),
    },
    TimelineEntry {
        date: Tr::new("15th May 2025", "మే 15, 2025"),
        title: Tr::new("The Wedding Day", "వివాహ రోజు"),
        description: Tr::new(
            "A simple story, rooted in tradition and blooming into love. Join us as we begin our journey together.",
            "సాంప్రదాయంలో వేరూనుకుని, ప్రేమగా వికసించిన సరళమైన కథ. మా ప్రయాణం ప్రారంభమవుతున్న ఈ క్షణాన్ని మాతో పంచుకోండి.",
        ),
    },
];

pub const MARRIAGE_EVENTS: [TimelineEntry; 7] = [
    TimelineEntry {
        date: Tr::new("11th May 2025", "మే 11, 2025"),
        title: Tr::new("Setting up the Wedding Canopy", "మంటపం ఏర్పాటుచేయడం"),
        description: Tr::new(
            "The auspicious beginning of our wedding celebrations, where the mandap is decorated with flowers and traditional elements, creating a sacred space for the ceremonies to follow.",
            "మా వివాహ వేడుకలు శుభారంభం, ఇక్కడ మంటపాన్ని పూలతో మరియు సాంప్రదాయ అలంకరణలతో అలంకరించి, కార్యక్రమాలకు పవిత్ర స్థలాన్ని సృష్టిస్తారు.",
        ),
    },
    TimelineEntry {
        date: Tr::new("14th May 2025, 09:30", "మే 14, 2025, ఉదయం 09:30"),
        title: Tr::new("Groom and Bride Preparations", "పెళ్లి కొడుకు మరియు పెళ్లి కూతురిని తయారుచేయడం"),
        description: Tr::new(
            "A joyous morning filled with traditional rituals, where both families help the bride and groom prepare for their special day with haldi ceremonies and blessings from elders.",
            "పసుపు కార్యక్రమాలు మరియు పెద్దల ఆశీర్వాదాలతో వధూవరులను సిద్ధం చేసే ఆనందకరమైన ఉదయం.",
        ),
    },
    TimelineEntry {
        date: Tr::new("14th May 2025, 17:00", "మే 14, 2025, సాయంత్రం 05:00"),
        title: Tr::new("Sacred Bath", "మంగళ స్నానం"),
        description: Tr::new(
            "An important purification ritual where the bride and groom separately undergo a ceremonial bath, symbolizing the cleansing of mind and body before entering the sacred bond of marriage.",
            "వివాహ బంధంలోకి ప్రవేశించే ముందు మనసు మరియు శరీరాన్ని శుద్ధి చేసుకునే ముఖ్యమైన శుద్ధి కార్యక్రమం.",
        ),
    },
    TimelineEntry {
        date: Tr::new("15th May 2025, 15:00", "మే 15, 2025, మధ్యాహ్నం 03:00"),
        title: Tr::new("Pulagam and Kala Gorlu", "పులగం మరియు కాల గోర్లు"),
        description: Tr::new(
            "A significant pre-wedding ritual where families come together to offer Pulagam (sacred rice) to deities and perform the Kalla Gorlu ceremony. Breaking of jaggery and coconuts symbolizes sweetness in marriage and prosperity for the couple's future.",
            "కుటుంబాలు కలిసి దేవతలకు పులగం (పవిత్ర అన్నం) సమర్పించి, కల్ల గోర్లు కార్యక్రమం నిర్వహించే ముఖ్యమైన పూర్వ వివాహ కార్యక్రమం. బెల్లం మరియు కొబ్బరికాయలు పగలగొట్టడం వివాహంలో మాధుర్యాన్ని మరియు దంపతుల భవిష్యత్తులో సమృద్ధిని సూచిస్తుంది.",
        ),
    },
    TimelineEntry {
        date: Tr::new("15th May 2025, 18:00", "మే 15, 2025, సాయంత్రం 06:00"),
        title: Tr::new("Baraat", "బరాత్"),
        description: Tr::new(
            "A grand procession where the groom and bride arrive with family and friends, accompanied by music and dance, symbolizing the joy of welcoming new relationships and celebrating the union of two families.",
            "సంగీతం మరియు నృత్యంతో కుటుంబం మరియు స్నేహితులతో కలిసి పెళ్లి కొడుకు రాక, కొత్త బంధాలను స్వాగతించే ఆనందాన్ని మరియు రెండు కుటుంబాల కలయికను జరుపుకోవడం.",
        ),
    },
    TimelineEntry {
        date: Tr::new("15th May 2025, 19:00", "మే 15, 2025, సాయంత్రం 07:00"),
        title: Tr::new("Reception", "స్వాగత కార్యక్రమం"),
        description: Tr::new(
            "An evening of celebration where friends and family gather to bless the couple, share meals, and create beautiful memories together in a festive atmosphere.",
            "స్నేహితులు మరియు కుటుంబ సభ్యులు దంపతులను ఆశీర్వదించి, భోజనం చేసి, పండుగ వాతావరణంలో అందమైన జ్ఞాపకాలను సృష్టించే సాయంత్రం.",
        ),
    },
    TimelineEntry {
        date: Tr::new("16th May 2025, 04:58", "మే 16, 2025, ఉదయం 04:58"),
        title: Tr::new("Marriage Ceremony", "వివాహం"),
        description: Tr::new(
            "The main ceremony at the auspicious muhurtham time, where sacred vows are exchanged and traditional rituals are performed to bind two souls in the presence of Agni as witness.",
            "శుభ ముహూర్తంలో జరిగే ప్రధాన కార్యక్రమం, ఇక్కడ పవిత్ర ప్రమాణాలు చేసుని అగ్ని సాక్షిగా సాంప్రదాయ కార్యక్రమాలు నిర్వహించబడతాయి.",
        ),
    },
];

/// Timeline entries alternate sides; even rows sit on the left.
pub fn is_left(index: usize) -> bool {
    index % 2 == 0
}
