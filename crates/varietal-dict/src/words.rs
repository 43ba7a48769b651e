//! Built-in word lists.

pub const FIRST_NAMES: &[&str] = &[
    "Adam", "Alice", "Andrew", "Anna", "Benjamin", "Bonnie", "Brian", "Carla", "Charles",
    "Chloe", "Daniel", "Diana", "Edward", "Emily", "Frank", "Grace", "George", "Hannah",
    "Henry", "Isabel", "Jack", "Julia", "James", "Karen", "Kevin", "Laura", "Lucas", "Maria",
    "Michael", "Nina", "Oliver", "Olivia", "Peter", "Rachel", "Robert", "Sarah", "Thomas",
    "Victoria", "William", "Zoe",
];

pub const SURNAMES: &[&str] = &[
    "Adams", "Baker", "Brown", "Carter", "Clark", "Collins", "Davis", "Evans", "Foster",
    "Garcia", "Green", "Hall", "Harris", "Hill", "Jackson", "Johnson", "King", "Lee", "Lewis",
    "Martin", "Miller", "Moore", "Nelson", "Parker", "Phillips", "Roberts", "Robinson",
    "Scott", "Smith", "Taylor", "Thomas", "Thompson", "Turner", "Walker", "White", "Wilson",
    "Wright", "Young",
];

pub const PASSWORDS: &[&str] = &[
    "123456", "porsche", "firebird", "prince", "rosebud", "password", "guitar", "butter",
    "beach", "jaguar", "12345678", "chelsea", "united", "amateur", "great", "1234", "black",
    "turtle", "7777777", "cool", "diamond", "steelers", "muffin", "cooper", "12345",
    "nascar", "tiffany", "redsox", "1313", "dragon", "jackson", "zxcvbn", "star", "scorpio",
    "qwerty", "cameron", "tomcat", "testing", "mountain", "696969", "654321", "golf",
    "shannon", "madison", "mustang", "computer", "bond007", "murphy", "987654", "letmein",
    "amanda", "bear", "frank", "brazil", "baseball", "wizard", "tiger", "hannah", "lauren",
    "master", "xxxxxxxx", "doctor", "dave", "japan", "michael", "money", "gateway", "eagle1",
    "football", "phoenix", "gators", "11111", "shadow", "mickey", "angel", "mother", "stars",
    "monkey", "bailey", "junior", "nathan", "apple", "abc123", "knight",
];

pub const DOMAINS: &[&str] = &[
    "ac", "ad", "ae", "aero", "af", "ag", "ai", "al", "am", "an", "ao", "aq", "ar", "arpa",
    "as", "asia", "at", "au", "aw", "ax", "az", "ba", "bb", "bd", "be", "bf", "bg", "bh",
    "bi", "biz", "bj", "bm", "bn", "bo", "br", "bs", "bt", "bv", "bw", "by", "bz", "ca",
    "cat", "cc", "cd", "cf", "cg", "ch", "ci", "ck", "cl", "cm", "cn", "co", "com", "coop",
    "cr", "cu", "cv", "cx", "cy", "cz", "de", "dj", "dk", "dm", "do", "dz", "ec", "edu",
    "ee", "eg", "er", "es", "et", "eu", "fi", "fj", "fk", "fm", "fo", "fr", "ga", "gb",
    "gd", "ge", "gf", "gg", "gh", "gi", "gl", "gm", "gn", "gov", "gp", "gq", "gr", "gs",
    "gt", "gu", "gw", "gy", "hk", "hm", "hn", "hr", "ht", "hu", "id", "ie", "il", "im",
    "in", "info", "int", "io", "iq", "ir", "is", "it", "je", "jm", "jo", "jobs", "jp", "ke",
    "kg", "kh", "ki", "km", "kn", "kp", "kr", "kw", "ky", "kz", "la", "lb", "lc", "li",
    "lk", "lr", "ls", "lt", "lu", "lv", "ly", "ma", "mc", "md", "me", "mg", "mh", "mil",
    "mk", "ml", "mm", "mn", "mo", "mobi", "mp", "mq", "mr", "ms", "mt", "mu", "museum",
    "mv", "mw", "mx", "my", "mz", "na", "name", "nc", "ne", "net", "nf", "ng", "ni", "nl",
    "no", "np", "nr", "nu", "nz", "om", "org", "pa", "pe", "pf", "pg", "ph", "pk", "pl",
    "pm", "pn", "pr", "pro", "ps", "pt", "pw", "py", "qa", "re", "ro", "rs", "ru", "rw",
    "sa", "sb", "sc", "sd", "se", "sg", "sh", "si", "sj", "sk", "sl", "sm", "sn", "so",
    "sr", "st", "su", "sv", "sy", "sz", "tc", "td", "tel", "tf", "tg", "th", "tj", "tk",
    "tl", "tm", "tn", "to", "tp", "tr", "travel", "tt", "tv", "tw", "tz", "ua", "ug", "uk",
    "us", "uy", "uz", "va", "vc", "ve", "vg", "vi", "vn", "vu", "wf", "ws", "xn", "ye",
    "yt", "yu", "za", "zm", "zw",
];

pub const COMMON_DOMAINS: &[&str] = &["com", "net", "org", "edu", "gov", "biz", "info"];

pub const LOREM_WORDS: &[&str] = &[
    "Lorem", "ipsum", "dolor", "sit", "amet,", "consectetur", "adipisicing", "elit,", "sed",
    "do", "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna",
    "aliqua.", "Ut", "enim", "ad", "minim", "veniam,", "quis", "nostrud", "exercitation",
    "ullamco", "laboris", "nisi", "ut", "aliquip", "ex", "ea", "commodo", "consequat.",
    "Duis", "aute", "irure", "dolor", "in", "reprehenderit", "in", "voluptate", "velit",
    "esse", "cillum", "dolore", "eu", "fugiat", "nulla", "pariatur.", "Excepteur", "sint",
    "occaecat", "cupidatat", "non", "proident,", "sunt", "in", "culpa", "qui", "officia",
    "deserunt", "mollit", "anim", "id", "est", "laborum.",
];
