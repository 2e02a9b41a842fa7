//! Book name tables for each supported language.
//!
//! Each entry is a canonical display name followed by the abbreviations and
//! spellings that resolve to it. Canonical names are matched implicitly.

/// English book names (Protestant canon).
pub(super) const ENGLISH: &[(&str, &[&str])] = &[
    // Old Testament
    ("Genesis", &["gen", "ge", "gn"]),
    ("Exodus", &["ex", "exo", "exod"]),
    ("Leviticus", &["lev", "le", "lv"]),
    ("Numbers", &["num", "nu", "nm", "nb"]),
    ("Deuteronomy", &["deut", "deu", "dt"]),
    ("Joshua", &["josh", "jos", "jsh"]),
    ("Judges", &["judg", "jdg", "jg", "jdgs"]),
    ("Ruth", &["rth", "ru"]),
    ("1 Samuel", &["1 sam", "1 sa", "1 sm", "i samuel", "1st samuel", "first samuel"]),
    ("2 Samuel", &["2 sam", "2 sa", "2 sm", "ii samuel", "2nd samuel", "second samuel"]),
    ("1 Kings", &["1 kgs", "1 ki", "1 kin", "i kings", "1st kings", "first kings"]),
    ("2 Kings", &["2 kgs", "2 ki", "2 kin", "ii kings", "2nd kings", "second kings"]),
    ("1 Chronicles", &["1 chr", "1 chron", "1 ch", "i chronicles", "first chronicles"]),
    ("2 Chronicles", &["2 chr", "2 chron", "2 ch", "ii chronicles", "second chronicles"]),
    ("Ezra", &["ezr", "ez"]),
    ("Nehemiah", &["neh", "ne"]),
    ("Esther", &["esth", "est", "es"]),
    ("Job", &["jb"]),
    ("Psalms", &["ps", "psa", "psalm", "pss", "psm"]),
    ("Proverbs", &["prov", "pro", "prv", "pr"]),
    ("Ecclesiastes", &["eccl", "eccles", "ecc", "ec", "qoh"]),
    ("Song of Solomon", &["song", "song of songs", "sos", "so", "canticles"]),
    ("Isaiah", &["isa", "is"]),
    ("Jeremiah", &["jer", "je", "jr"]),
    ("Lamentations", &["lam", "la"]),
    ("Ezekiel", &["ezek", "eze", "ezk"]),
    ("Daniel", &["dan", "da", "dn"]),
    ("Hosea", &["hos", "ho"]),
    ("Joel", &["jl"]),
    ("Amos", &["am"]),
    ("Obadiah", &["obad", "ob"]),
    ("Jonah", &["jnh", "jon"]),
    ("Micah", &["mic", "mc"]),
    ("Nahum", &["nah", "na"]),
    ("Habakkuk", &["hab", "hb"]),
    ("Zephaniah", &["zeph", "zep", "zp"]),
    ("Haggai", &["hag", "hg"]),
    ("Zechariah", &["zech", "zec", "zc"]),
    ("Malachi", &["mal", "ml"]),
    // New Testament
    ("Matthew", &["matt", "mat", "mt"]),
    ("Mark", &["mrk", "mar", "mk", "mr"]),
    ("Luke", &["luk", "lk"]),
    ("John", &["joh", "jhn", "jn"]),
    ("Acts", &["act", "ac"]),
    ("Romans", &["rom", "ro", "rm"]),
    ("1 Corinthians", &["1 cor", "1 co", "i corinthians", "first corinthians"]),
    ("2 Corinthians", &["2 cor", "2 co", "ii corinthians", "second corinthians"]),
    ("Galatians", &["gal", "ga"]),
    ("Ephesians", &["eph", "ephes"]),
    ("Philippians", &["phil", "php", "pp"]),
    ("Colossians", &["col", "co"]),
    ("1 Thessalonians", &["1 thess", "1 thes", "1 th", "i thessalonians", "first thessalonians"]),
    ("2 Thessalonians", &["2 thess", "2 thes", "2 th", "ii thessalonians", "second thessalonians"]),
    ("1 Timothy", &["1 tim", "1 ti", "i timothy", "first timothy"]),
    ("2 Timothy", &["2 tim", "2 ti", "ii timothy", "second timothy"]),
    ("Titus", &["tit", "ti"]),
    ("Philemon", &["philem", "phm", "pm"]),
    ("Hebrews", &["heb"]),
    ("James", &["jas", "jm"]),
    ("1 Peter", &["1 pet", "1 pe", "1 pt", "i peter", "first peter"]),
    ("2 Peter", &["2 pet", "2 pe", "2 pt", "ii peter", "second peter"]),
    ("1 John", &["1 jn", "1 jhn", "1 jo", "i john", "first john"]),
    ("2 John", &["2 jn", "2 jhn", "2 jo", "ii john", "second john"]),
    ("3 John", &["3 jn", "3 jhn", "3 jo", "iii john", "third john"]),
    ("Jude", &["jud", "jd"]),
    ("Revelation", &["rev", "re", "revelations", "the revelation"]),
];

/// Spanish book names (Reina-Valera naming).
pub(super) const SPANISH: &[(&str, &[&str])] = &[
    // Antiguo Testamento
    ("Génesis", &["gn", "gen"]),
    ("Éxodo", &["ex", "exo", "éx"]),
    ("Levítico", &["lv", "lev"]),
    ("Números", &["nm", "nu", "num"]),
    ("Deuteronomio", &["dt", "deut", "deu"]),
    ("Josué", &["jos"]),
    ("Jueces", &["jue", "jc"]),
    ("Rut", &["rt"]),
    ("1 Samuel", &["1 sam", "1 sa", "1 s"]),
    ("2 Samuel", &["2 sam", "2 sa", "2 s"]),
    ("1 Reyes", &["1 re", "1 r", "1 rey"]),
    ("2 Reyes", &["2 re", "2 r", "2 rey"]),
    ("1 Crónicas", &["1 cr", "1 cro", "1 cron"]),
    ("2 Crónicas", &["2 cr", "2 cro", "2 cron"]),
    ("Esdras", &["esd"]),
    ("Nehemías", &["neh", "ne"]),
    ("Ester", &["est"]),
    ("Job", &["jb"]),
    ("Salmos", &["sal", "salmo", "sl"]),
    ("Proverbios", &["pr", "pro", "prov"]),
    ("Eclesiastés", &["ec", "ecl", "ecles"]),
    ("Cantares", &["cnt", "cant", "cantar de los cantares"]),
    ("Isaías", &["is", "isa"]),
    ("Jeremías", &["jer", "jr"]),
    ("Lamentaciones", &["lm", "lam"]),
    ("Ezequiel", &["ez", "eze"]),
    ("Daniel", &["dn", "dan"]),
    ("Oseas", &["os"]),
    ("Joel", &["jl"]),
    ("Amós", &["am"]),
    ("Abdías", &["abd"]),
    ("Jonás", &["jon"]),
    ("Miqueas", &["mi", "miq"]),
    ("Nahúm", &["nah"]),
    ("Habacuc", &["hab"]),
    ("Sofonías", &["sof"]),
    ("Hageo", &["hag"]),
    ("Zacarías", &["zac"]),
    ("Malaquías", &["mal"]),
    // Nuevo Testamento
    ("Mateo", &["mt", "mat"]),
    ("Marcos", &["mr", "mc", "mar"]),
    ("Lucas", &["lc", "luc"]),
    ("Juan", &["jn", "jua"]),
    ("Hechos", &["hch", "hech", "hec"]),
    ("Romanos", &["ro", "rom"]),
    ("1 Corintios", &["1 co", "1 cor"]),
    ("2 Corintios", &["2 co", "2 cor"]),
    ("Gálatas", &["gá", "gal"]),
    ("Efesios", &["ef", "efe"]),
    ("Filipenses", &["fil", "flp"]),
    ("Colosenses", &["col"]),
    ("1 Tesalonicenses", &["1 ts", "1 tes"]),
    ("2 Tesalonicenses", &["2 ts", "2 tes"]),
    ("1 Timoteo", &["1 ti", "1 tim"]),
    ("2 Timoteo", &["2 ti", "2 tim"]),
    ("Tito", &["tit"]),
    ("Filemón", &["flm", "filem"]),
    ("Hebreos", &["he", "heb"]),
    ("Santiago", &["stg", "sant"]),
    ("1 Pedro", &["1 p", "1 pe", "1 ped"]),
    ("2 Pedro", &["2 p", "2 pe", "2 ped"]),
    ("1 Juan", &["1 jn", "1 jua"]),
    ("2 Juan", &["2 jn", "2 jua"]),
    ("3 Juan", &["3 jn", "3 jua"]),
    ("Judas", &["jud"]),
    ("Apocalipsis", &["ap", "apoc", "apo"]),
];
