//! Built-in category signature tables.
//!
//! The vocabulary here is a versioned configuration artifact: business
//! names and keywords are matched as whole words (case-insensitive), and
//! each amount pattern is a label prefix that gets the shared numeric
//! capture tail appended when the knowledge base compiles it.

use crate::models::category::Category;

/// Raw signature lists for one category, before compilation.
pub(super) struct SignatureData {
    pub category: Category,
    pub business_names: &'static [&'static str],
    pub keywords: &'static [&'static str],
    /// Amount-label patterns, ordered most-specific first.
    pub amount_patterns: &'static [&'static str],
}

pub(super) const SIGNATURES: &[SignatureData] = &[
    SignatureData {
        category: Category::Food,
        business_names: &[
            // national chains
            "swiggy", "zomato", "dominos", "pizza hut", "kfc", "mcdonalds", "burger king",
            "subway", "starbucks", "ccd", "cafe coffee day", "haldiram", "bikanerwala",
            "saravana bhavan", "paradise", "behrouz", "faasos", "ovenstory", "chai point",
            "chaayos", "barbeque nation", "mainland china", "wow momo", "mad over donuts",
            "dunkin", "krispy kreme", "taco bell", "freshmenu", "box8", "mojo pizza",
            "lunchbox", "sagar ratna", "a2b", "adyar ananda bhavan", "cream stone",
            "naturals", "baskin robbins", "gianis", "keventers", "punjabi dhaba",
            "kaati zone", "the belgian waffle", "tibbs frankie", "rolls mania", "vadilal",
            "amul",
            // Kalaburagi-area vendors
            "amanthrana", "citrus hotel", "punchin", "goodluck the venue", "frespresso",
            "atharva hotel", "al makki arabian", "hotel mehfil", "shanbhag", "nisarga",
            "hotel sai palace", "green park", "mayura", "udupi hotel", "kamat", "sangam",
            "kalaburagi restaurant", "shiva sagar", "hotel shree sai", "new taj",
            "prakash hotel", "santrupthi", "vaibhav", "annapurna", "renuka", "sagar hotel",
            "hotel rajdhani", "vasavi", "padma", "sri sai", "gulbarga pride", "laxmi",
            // generic terms
            "hotel", "restaurant", "cafe", "bistro", "diner", "dhaba", "mess", "canteen",
            "bar", "pub", "brewery", "kitchen", "eatery", "food court", "tiffin",
            "bhojanalaya", "udupi", "darshini", "thali", "ruchira", "ananda", "bhavan",
            "paradise", "biryani house", "punjabi", "south indian", "north indian",
            "chinese corner", "fast food", "juice center", "bakery", "sweets", "mithai",
            "ice cream parlour", "tea stall", "coffee shop", "snack bar", "veg restaurant",
            "non veg", "family restaurant", "food point",
        ],
        keywords: &[
            // tax and invoice terms
            "cgst", "sgst", "igst", "gstin", "gst", "service charge", "vat", "fssai",
            "bill of supply", "tax invoice", "cash memo", "kot", "kitchen order",
            // bill structure
            "menu", "items", "qty", "quantity", "rate", "price", "amount", "total",
            "grand total", "subtotal", "round off", "net payable", "net amount",
            "bill total", "bill amount", "starter", "appetizer", "main course", "dessert",
            "beverage", "breads", "rice", "biryani", "thali", "combo", "meal", "platter",
            "special", "chef special", "recommended",
            // menu items
            "roti", "naan", "kulcha", "paratha", "chapati", "puri", "bhatura", "dosa",
            "idli", "vada", "upma", "paneer", "chicken", "mutton", "fish", "prawn", "egg",
            "dal", "sabzi", "curry", "masala", "fry", "gravy", "tandoor", "kebab", "tikka",
            "korma", "butter", "palak", "kadai", "chettinad",
            // beverages and extras
            "tea", "coffee", "chai", "espresso", "cappuccino", "latte", "cold coffee",
            "juice", "shake", "smoothie", "lassi", "buttermilk", "water", "mineral water",
            "bottle", "soft drink", "cola", "packing", "container charge",
            "delivery charge", "delivery", "takeaway", "packaging", "tips",
            // dine-in and order terms
            "cover", "persons", "guests", "table", "seat", "waiter", "served", "order",
            "ordered", "discount", "offer", "coupon", "loyalty", "points", "cashback",
        ],
        amount_patterns: &[
            r"grand\s*total",
            r"net\s*(?:amount|payable)",
            r"total\s*(?:payable|amount|bill)",
            r"bill\s*(?:amount|total)",
            r"amount\s*to\s*(?:pay|be\s*paid)",
            r"(?:final|net|gross)\s*total",
        ],
    },
    SignatureData {
        category: Category::Shopping,
        business_names: &[
            // retail chains
            "reliance", "reliance fresh", "reliance smart", "reliance trends", "dmart",
            "big bazaar", "smart bazaar", "more", "spencers", "nature basket", "ratnadeep",
            "star bazaar", "hypercity", "spar", "metro cash", "pantaloons", "shoppers stop",
            "lifestyle", "westside", "max", "trends", "central", "brand factory", "zara",
            "h&m", "decathlon", "sports station", "uniqlo", "marks & spencer",
            // electronics
            "croma", "vijay sales", "reliance digital", "sangeetha", "poorvika", "girias",
            "pai international", "viveks", "ezone", "sony center", "samsung store",
            "mi store", "apple store", "oneplus", "realme",
            // jewelry
            "titan", "tanishq", "kalyan", "malabar", "joyalukkas", "grt", "bhima",
            "pn gadgil", "tribhovandas bhimji", "lalithaa", "nac jewellers", "jos alukkas",
            "pc jeweller",
            // footwear and accessories
            "bata", "metro", "mochi", "red tape", "woodland", "nike", "adidas", "puma",
            "reebok", "skechers", "lenskart", "titan eye plus", "lawrence & mayo",
            // e-commerce
            "amazon", "flipkart", "myntra", "ajio", "nykaa", "firstcry", "bigbasket",
            "blinkit", "zepto", "dunzo", "grofers", "snapdeal", "meesho", "shopsy",
            "jiomart", "tata cliq", "udaan",
        ],
        keywords: &[
            "tax invoice", "retail invoice", "cash memo", "sale invoice", "purchase invoice",
            "gstin", "gst", "hsn", "hsn code", "sac", "mrp", "discount", "savings",
            "you saved", "off", "qty", "quantity", "rate", "unit price", "gross", "net",
            "cgst", "sgst", "igst", "cess", "round off", "roundoff", "loyalty", "points",
            "reward", "cashback",
            // product categories
            "apparel", "garment", "clothing", "footwear", "shoe", "sandal", "electronics",
            "mobile", "phone", "laptop", "accessory", "grocery", "vegetable", "fruit",
            "staples", "fmcg", "personal care", "home care", "stationary", "toy", "gift",
            "book", "cosmetic", "beauty", "fashion", "sports", "fitness", "kitchen",
            "appliance", "furniture", "decor", "hardware", "electrical", "plumbing",
        ],
        amount_patterns: &[
            r"(?:invoice|bill)\s*(?:value|amount|total)",
            r"net\s*(?:payable|amount|total)",
            r"(?:total|grand)\s*(?:amount|value)",
            r"(?:amount|balance)\s*(?:due|payable)",
            r"you\s*(?:pay|paid)",
        ],
    },
    SignatureData {
        category: Category::Medical,
        business_names: &[
            // pharmacy chains
            "apollo", "apollo pharmacy", "medplus", "wellness forever", "noble plus",
            "frank ross", "guardian", "sanjivani", "medicine shoppe", "netmeds",
            "pharmeasy", "1mg", "practo", "tata 1mg",
            // diagnostics
            "thyrocare", "lal pathlabs", "srl", "dr lal pathlabs", "metropolis",
            "path labs", "pathkind", "suburban diagnostics", "vijaya diagnostics",
            "healthians", "redcliffe labs", "apollo diagnostics",
            // hospitals
            "apollo hospital", "fortis", "manipal", "columbia asia", "max hospital",
            "medanta", "narayana", "kims hospital", "care hospital", "rainbow hospital",
            "cloudnine", "aiims", "pgimer", "jipmer",
            // generic terms
            "hospital", "clinic", "nursing home", "polyclinic", "dispensary", "pharmacy",
            "chemist", "druggist", "medical", "diagnostics", "scan", "lab", "laboratory",
            "imaging", "doctor", "dr.",
        ],
        keywords: &[
            // regulatory
            "batch", "batch no", "expiry", "exp", "exp date", "mfg", "mfg date", "dr.",
            "doctor", "patient", "prescribed", "prescription", "rx", "consultation",
            "consultation fee", "gstin", "dl no", "dl number", "drug lic", "drug license",
            "pharmacist",
            // dispensed items
            "tablet", "capsule", "syrup", "suspension", "injection", "ointment", "cream",
            "lotion", "drops", "inhaler", "strip", "bottle", "vial", "sachet", "powder",
            "gel",
            // tests and procedures
            "test", "investigation", "report", "xray", "x-ray", "scan", "ct scan", "mri",
            "ultrasound", "ecg", "blood test", "urine test", "biopsy", "checkup",
            "screening", "vaccination", "immunization",
            // billing terms
            "opd", "ipd", "admission", "discharge", "bed charges", "consultation",
            "treatment", "procedure", "medicine", "lab charges", "diagnostic charges",
        ],
        amount_patterns: &[
            r"(?:net|total|bill)\s*amount",
            r"amount\s*(?:payable|to\s*pay)",
            r"grand\s*total",
            r"patient\s*(?:bill|payment)",
        ],
    },
    SignatureData {
        category: Category::Travel,
        business_names: &[
            // cab services
            "uber", "ola", "ola cabs", "rapido", "blusmart", "meru", "mega cabs",
            "tab cab", "radio cab", "auto", "rickshaw",
            // railways and metros
            "irctc", "indian railways", "railway", "cris", "e-ticket", "ers",
            "electronic reservation", "southern railway", "northern railway",
            "western railway", "eastern railway", "central railway",
            "south central railway", "south eastern railway", "north eastern railway",
            "konkan railway", "south east central railway", "metro railway", "dmrc",
            "namma metro", "kochi metro", "bmrcl",
            // bus operators
            "ksrtc", "msrtc", "tsrtc", "apsrtc", "rsrtc", "gsrtc", "bmtc", "best",
            "tnstc", "upsrtc", "redbus", "abhibus", "zingbus", "intrcity", "vrl travels",
            "sbstc", "orange travels", "neeta travels", "paulo travels",
            "shrinath travels", "parveen travels",
            // airlines
            "indigo", "air india", "vistara", "spicejet", "akasa", "air asia", "go first",
            "go air",
            // travel portals
            "makemytrip", "goibibo", "easemytrip", "cleartrip", "ixigo", "yatra",
            "paytm travel", "via.com",
            // others
            "toll", "fastag", "parking", "metro", "local train", "auto", "taxi", "ferry",
        ],
        keywords: &[
            // rail booking terms
            "pnr", "pnr no", "pnr number", "train no", "train number", "coach", "seat",
            "seat no", "berth", "quota", "boarding", "destination", "passenger", "arrival",
            "departure", "journey", "resv", "reservation", "booking id", "transaction id",
            "crn", "class", "sleeper", "ac", "1ac", "2ac", "3ac", "chair car", "cc", "ec",
            "executive", "first class", "second class", "general", "rac", "waiting list",
            "wl", "confirmed", "cnf", "tatkal", "premium tatkal", "chart", "tdr", "fare",
            "base fare", "reservation charge", "superfast charge", "catering charge",
            "service tax", "irctc service charge", "payment gateway", "pg charge", "ers",
            "e-ticket", "from", "to", "via", "distance", "boarding point", "arrived",
            "scheduled", "platform",
            // common travel terms
            "trip", "ride", "fare", "ticket", "booking", "reference", "confirmation",
            "itinerary", "driver", "vehicle", "vehicle no", "toll", "parking", "base fare",
            "taxes", "insurance", "convenience fee", "platform fee", "booking fee",
            "cancellation", "gstin", "gst", "passenger", "traveller", "adult", "child",
            "infant", "senior citizen", "date of journey", "time", "duration", "distance",
            "route", "pickup", "drop", "source", "destination",
            // flight terms
            "flight", "flight no", "airline", "terminal", "gate", "baggage", "check-in",
            "boarding pass", "pnr", "e-ticket", "departure", "arrival", "economy",
            "business", "first class",
            // bus terms
            "bus", "bus no", "depot", "boarding point", "dropping point", "seat type",
            "seater", "sleeper", "semi sleeper", "volvo", "ac", "non ac",
        ],
        amount_patterns: &[
            r"(?:total|net)\s*fare",
            r"(?:ticket|booking)\s*(?:amount|fare)",
            r"(?:transaction|payment)\s*amount",
            r"amount\s*(?:paid|payable)",
            r"(?:bill|trip|ride)\s*(?:total|fare)",
            r"(?:grand|final)\s*total",
            r"fare",
            r"you\s*paid",
        ],
    },
    SignatureData {
        category: Category::Entertainment,
        business_names: &[
            // cinemas and ticketing
            "bookmyshow", "bms", "paytm insider", "insider", "pvr", "pvr cinemas", "inox",
            "inox movies", "cinepolis", "carnival cinemas", "miraj", "miraj cinemas",
            "mukta a2", "qube", "cinemaxx", "gold cinema", "movie time", "fun cinemas",
            "wave cinemas", "big cinemas", "city pride", "delite cinemas", "jagadamba",
            "prasads", "ticketnew", "justickets", "cinema", "theatre", "multiplex", "imax",
            "cineplex", "4dx", "screen", "talkies",
            // parks and venues
            "wonderla", "adlabs imagica", "snow world", "ramoji film city",
            "innovative film city", "nicco park", "essel world", "kishkinta",
            "snow kingdom", "timezone", "smaaash", "funcity", "gaming zone",
            "amusement park", "theme park", "water park",
        ],
        keywords: &[
            // movie tickets
            "movie", "film", "show", "showtime", "seat", "seat no", "screen", "audi",
            "auditorium", "ticket", "tickets", "booking id", "booking reference",
            "confirmation", "barcode", "qr code", "convenience fee",
            "internet handling fee", "booking fee", "box office", "row", "category",
            "gold", "platinum", "silver", "recliner", "sofa", "director cut", "lounger",
            "couple seat",
            // concessions
            "popcorn", "combo", "nachos", "cold drink", "coke", "pepsi", "snacks", "food",
            "beverage", "f&b", "meal combo",
            // show details
            "date", "time", "language", "subtitles", "2d", "3d", "imax", "4dx", "atmos",
            "dolby", "matinee", "evening", "night show", "special screening", "premiere",
            "first day first show",
            // events
            "event", "concert", "show", "live", "performance", "stand up", "comedy",
            "music", "festival", "exhibition", "entry", "pass", "gate", "venue",
        ],
        amount_patterns: &[
            r"(?:total|grand)\s*(?:amount|value)",
            r"amount\s*(?:paid|payable)",
            r"(?:ticket|booking)\s*(?:amount|price)",
            r"you\s*paid",
            r"net\s*payable",
        ],
    },
    SignatureData {
        category: Category::Fuel,
        business_names: &[
            "indian oil", "indianoil", "ioc", "iocl", "bharat petroleum", "bpcl",
            "hindustan petroleum", "hpcl", "shell", "essar", "nayara", "nayara energy",
            "reliance petroleum", "petrol pump", "fuel station", "gas station", "bunk",
            "filling station",
        ],
        keywords: &[
            "petrol", "diesel", "cng", "lpg", "gas", "fuel", "nozzle", "density",
            "rate/ltr", "rate per ltr", "rate per litre", "volume", "quantity", "litre",
            "ltr", "fcc", "pump", "attendant", "vehicle no", "odometer", "grade", "octane",
            "speed", "power", "xtra premium", "dynamic",
        ],
        amount_patterns: &[
            r"(?:net|total|sale)\s*amount",
            r"amount",
            r"value",
            r"paid",
        ],
    },
    SignatureData {
        category: Category::Utilities,
        business_names: &[
            // electricity boards
            "bescom", "cescom", "hescom", "mescom", "gescom", "kptcl", "tata power",
            "adani power", "bses", "cesc", "msedcl", "mahadiscom", "tneb", "tangedco",
            "apspdcl", "tsspdcl", "jseb", "wbsedcl", "dhbvn", "ugvcl", "electricity board",
            "power distribution",
            // telecom and broadband
            "airtel", "jio", "reliance jio", "vi", "vodafone", "idea", "vodafone idea",
            "bsnl", "mtnl", "act fibernet", "act", "hathway", "tikona", "spectranet",
            "excitel", "you broadband", "netplus", "den", "siti cable", "gtpl",
            "alliance broadband",
            // water, gas, civic
            "bwssb", "bangalore water supply", "djb", "delhi jal board", "mcgm", "bmc",
            "bbmp", "municipality", "corporation", "panchayat", "property tax",
            "house tax", "gas", "lpg", "cooking gas", "indane", "hp gas", "bharat gas",
        ],
        keywords: &[
            "bill", "bill date", "due date", "payment date", "account no",
            "account number", "consumer no", "consumer number", "ca no",
            "relationship no", "crn", "meter no", "meter number", "service no",
            "connection id", "previous reading", "current reading", "present reading",
            "units", "consumption", "usage", "kwh", "fixed charges", "energy charges",
            "fuel charges", "surcharge", "arrears", "advance", "security deposit",
            "late payment", "penalty", "meter rent", "plan", "tariff", "validity", "data",
            "calls", "sms", "recharge", "postpaid", "prepaid", "broadband", "internet",
            "tv", "dth", "cable",
        ],
        amount_patterns: &[
            r"(?:bill|total)\s*amount",
            r"(?:total|net)\s*payable",
            r"amount\s*(?:due|payable)",
            r"(?:you\s*pay|pay\s*amount)",
            r"outstanding",
        ],
    },
    SignatureData {
        category: Category::Education,
        business_names: &[
            "byju", "byjus", "unacademy", "vedantu", "toppr", "white hat jr", "upgrad",
            "great learning", "simplilearn", "coursera", "udemy", "udacity", "edx",
            "khan academy", "extramarks", "meritnation", "school", "college", "university",
            "institute", "academy", "coaching", "tuition", "classes", "cbse", "icse",
            "iit", "neet", "jee", "gate", "cat", "ielts", "toefl", "gre", "gmat",
            "british council", "ies", "fiitjee", "allen", "aakash", "resonance", "vibrant",
            "narayana", "sri chaitanya", "pace", "career launcher", "time", "ims",
        ],
        keywords: &[
            "fee", "fees", "tuition", "admission", "enrollment", "registration", "course",
            "semester", "term", "annual", "monthly", "quarterly", "examination", "exam",
            "hostel", "mess", "transport", "bus", "library", "lab", "sports", "activity",
            "uniform", "books", "stationery", "caution", "deposit", "development",
            "infrastructure", "computer", "late fee", "arrears", "scholarship",
            "concession", "student", "roll no", "admission no", "academic year", "batch",
            "grade", "class",
        ],
        amount_patterns: &[
            r"(?:fee|fees)\s*(?:amount|total)",
            r"(?:total|net)\s*(?:amount|payable|fee)",
            r"amount\s*(?:paid|payable)",
            r"(?:grand|final)\s*total",
        ],
    },
    SignatureData {
        category: Category::Investments,
        business_names: &[
            // brokers and trading
            "zerodha", "groww", "upstox", "angel one", "angel broking", "5paisa",
            "icici direct", "hdfc securities", "kotak securities", "sharekhan",
            "motilal oswal", "edelweiss", "axis direct", "sbi securities", "paytm money",
            "ind money", "etmoney", "fyers", "alice blue", "samco", "choice broking",
            // mutual funds
            "sbi mutual fund", "hdfc mf", "icici prudential", "axis mf", "nippon india",
            "kotak mf", "aditya birla", "uti mf", "dsp", "franklin templeton",
            "mirae asset", "ppfas", "parag parikh", "quantum", "tata mutual fund",
            "idfc mf", "l&t mf", "invesco", "sundaram", "baroda bnp paribas",
            // banks and NBFCs
            "sbi", "state bank", "hdfc bank", "icici bank", "axis bank", "kotak bank",
            "yes bank", "indusind", "idfc first", "rbl bank", "federal bank",
            "south indian bank", "karnataka bank", "pnb", "punjab national",
            "bank of baroda", "canara bank", "union bank", "bank of india", "indian bank",
            "central bank", "indian overseas", "uco bank", "paytm payments bank",
            "bajaj finance", "bajaj finserv", "piramal finance", "tata capital",
            "mahindra finance",
        ],
        keywords: &[
            // trading terms
            "trade", "trading", "buy", "sell", "stock", "equity", "share", "demat",
            "trading account", "brokerage", "stcg", "ltcg", "short term", "long term",
            "capital gain", "dividend", "bonus", "split", "ipo", "fno", "f&o", "futures",
            "options", "call", "put", "strike", "expiry", "nse", "bse", "sensex", "nifty",
            "contract note", "trade confirmation", "settlement", "stt",
            "securities transaction tax", "stamp duty", "dp charges",
            "transaction charges", "gst", "sebi", "turnover", "client code", "order id",
            "trade id", "scrip", "isin",
            // mutual funds
            "sip", "systematic investment", "lumpsum", "redemption", "switch", "nav",
            "units", "folio", "scheme", "plan", "growth", "dividend", "payout",
            "reinvestment", "direct", "regular", "elss", "tax saving", "equity fund",
            "debt fund", "hybrid", "balanced", "liquid", "amc",
            // banking
            "loan", "emi", "interest", "principal", "balance", "disbursement",
            "repayment", "foreclosure", "fixed deposit", "fd", "recurring deposit", "rd",
            "savings", "current", "overdraft", "cheque", "neft", "rtgs", "imps", "upi",
            "ifsc", "account number", "branch", "transaction", "statement",
            // insurance-linked products
            "premium", "policy", "insurance", "lic", "life insurance", "health insurance",
            "term insurance", "sum assured", "maturity", "surrender", "renewal", "claim",
        ],
        amount_patterns: &[
            r"(?:total|net|invested)\s*(?:amount|value)",
            r"(?:transaction|trade)\s*(?:amount|value)",
            r"(?:purchase|sale)\s*(?:amount|value)",
            r"amount\s*(?:paid|received|payable)",
            r"(?:premium|emi|installment)",
            r"(?:principal|interest)",
        ],
    },
    SignatureData {
        category: Category::Insurance,
        business_names: &[
            "lic", "life insurance corporation", "sbi life", "hdfc life",
            "icici prudential life", "max life", "bajaj allianz", "tata aia",
            "pnb metlife", "kotak life", "aditya birla sun life", "star health",
            "care health", "niva bupa", "manipal cigna", "aditya birla health",
            "hdfc ergo", "icici lombard", "bajaj allianz general", "new india assurance",
            "oriental insurance", "united india insurance", "national insurance",
            "reliance general", "future generali", "digit insurance", "acko", "go digit",
            "policybazaar", "renewbuy",
        ],
        keywords: &[
            "premium", "policy", "policy no", "policy number", "insurance", "insured",
            "assured", "sum assured", "cover", "coverage", "term", "maturity", "renewal",
            "renewal date", "expiry", "nominee", "beneficiary", "claim", "life", "health",
            "mediclaim", "vehicle", "car", "bike", "two wheeler", "four wheeler", "motor",
            "third party", "comprehensive", "idv", "ncb", "no claim bonus", "add on",
            "rider", "cashless", "reimbursement", "hospitalization", "room rent",
            "deductible", "co-payment", "waiting period",
        ],
        amount_patterns: &[
            r"premium\s*(?:amount|paid)?",
            r"(?:total|net)\s*(?:premium|amount)",
            r"amount\s*(?:payable|paid)",
            r"sum\s*assured",
        ],
    },
    SignatureData {
        category: Category::Subscriptions,
        business_names: &[
            // streaming
            "netflix", "amazon prime", "prime video", "disney hotstar", "hotstar",
            "disney+", "sonyliv", "zee5", "alt balaji", "voot", "mx player", "jiocinema",
            "aha", "sun nxt", "eros now", "youtube premium", "spotify", "apple music",
            "gaana", "jiosaavn", "wynk", "hungama",
            // newspapers and magazines
            "times of india", "toi", "hindu", "indian express", "hindustan times",
            "deccan chronicle", "economic times", "mint", "business standard",
            "telegraph", "tribune", "vijaya karnataka", "prajavani", "udayavani",
            "samyukta karnataka", "magzter", "readwhere",
            // memberships
            "kindle unlimited", "audible", "scribd", "zomato gold", "swiggy super",
            "dunzo daily", "milkbasket", "big basket", "grofers", "amazon subscribe",
            "flipkart plus", "myntra insider",
        ],
        keywords: &[
            "subscription", "plan", "monthly", "quarterly", "annual", "yearly",
            "auto renewal", "recurring", "membership", "premium", "pro", "plus", "gold",
            "platinum", "family", "individual", "student", "validity", "expires on",
            "next billing", "renewal date",
        ],
        amount_patterns: &[
            r"(?:subscription|plan)\s*(?:amount|fee|price)",
            r"(?:total|net)\s*(?:amount|payable)",
            r"amount\s*(?:paid|charged)",
            r"(?:monthly|annual)\s*(?:charge|fee)",
        ],
    },
    SignatureData {
        category: Category::PersonalCare,
        business_names: &[
            "lakme salon", "naturals", "juice salon", "toni and guy", "geetanjali salon",
            "looks salon", "enrich salon", "affinity salon", "bodycraft", "vlcc", "kaya",
            "shahnaz husain", "omorose", "jawed habib", "green trends", "bounce salon",
            "spalon", "olivia", "jean claude biguine",
        ],
        keywords: &[
            "haircut", "hair", "spa", "facial", "clean up", "bleach", "waxing",
            "threading", "manicure", "pedicure", "massage", "treatment", "coloring",
            "highlights", "smoothening", "rebonding", "keratin", "straightening",
            "styling", "blow dry", "hair wash", "head massage", "service", "therapist",
            "stylist",
        ],
        amount_patterns: &[
            r"(?:total|net|bill)\s*(?:amount|value)",
            r"amount\s*(?:paid|payable)",
            r"(?:service|treatment)\s*(?:charge|fee)",
        ],
    },
    SignatureData {
        category: Category::Rent,
        business_names: &[
            "magic bricks", "magicbricks", "99acres", "housing.com", "nestaway", "zolo",
            "oyo life", "colive", "stanza living", "paying guest", "pg", "hostel", "flat",
            "apartment", "property",
        ],
        keywords: &[
            "rent", "rental", "monthly rent", "lease", "deposit", "security deposit",
            "maintenance", "society charges", "water charges", "parking", "electricity",
            "advance", "token", "agreement", "lease deed", "tenant", "landlord", "owner",
            "flat no", "house no", "property", "bhk", "1bhk", "2bhk", "3bhk", "furnished",
            "semi furnished", "unfurnished", "pg charges", "room rent",
        ],
        amount_patterns: &[
            r"(?:rent|rental)\s*(?:amount)?",
            r"(?:total|net)\s*(?:amount|payable)",
            r"(?:deposit|advance|token)",
            r"(?:maintenance|society)\s*(?:charges)?",
        ],
    },
];
