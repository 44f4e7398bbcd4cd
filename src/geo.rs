//! Handle → US state (or DC) lookup.

use std::collections::HashMap;
use std::sync::LazyLock;

static STATES: &[(&str, &str)] = &[
    ("Princeton", "NJ"), ("MIT", "MA"), ("Harvard", "MA"), ("Stanford", "CA"),
    ("Yale", "CT"), ("CalTech", "CA"), ("DukeU", "NC"), ("JohnsHopkins", "MD"),
    ("NorthwesternU", "IL"), ("Penn", "PA"), ("Columbia", "NY"), ("UChicago", "IL"),
    ("Cornell", "NY"), ("BrownU", "RI"), ("Rice", "TX"), ("Dartmouth", "NH"),
    ("Vanderbilt", "TN"), ("NotreDame", "IN"), ("WashU", "MO"), ("Georgetown", "DC"),
    ("EmoryUniversity", "GA"), ("UNC", "NC"), ("UMich", "MI"), ("NYU", "NY"),
    ("Carnegie_Mellon", "PA"), ("UVA", "VA"), ("WakeForestU", "NC"), ("UFlorida", "FL"),
    ("USC_", "CA"), ("TuftsUniversity", "MA"), ("UTexasAustin", "TX"),
    ("BostonCollege", "MA"), ("GTechNews", "GA"), ("UWMadison", "WI"),
    ("UofIllinois", "IL"), ("BostonU", "MA"), ("WilliamandMary", "VA"),
    ("UROCHESTERnews", "NY"), ("BrandeisU", "MA"), ("CaseWestern", "OH"),
    ("GeorgeWashU", "DC"), ("NortheasternU", "MA"), ("OhioState", "OH"),
    ("LifeAtPurdue", "IN"), ("TulaneU", "LA"), ("VillanovaU", "PA"),
    ("FloridaState", "FL"), ("PittTweet", "PA"), ("RutgersU", "NJ"),
    ("SyracuseU", "NY"), ("templemade", "PA"), ("UConn", "CT"), ("UMNews", "MN"),
    ("VirginiaTech", "VA"), ("American_U", "DC"), ("BaylorU", "TX"),
    ("Clemson", "SC"), ("ColoradoMines", "CO"), ("GonzagaU", "WA"),
    ("SouthMethodistU", "TX"), ("StevensInst", "NJ"), ("UDelaware", "DE"),
    ("UnivOfMiami", "FL"), ("Auburn", "AL"), ("DrexelU", "PA"), ("FordhamNYC", "NY"),
    ("Creighton", "NE"), ("HowardU", "DC"), ("LoyolaChicago", "IL"), ("NJIT", "NJ"),
    ("UCBerkeley", "CA"), ("UCLA", "CA"), ("UCSB", "CA"), ("UCSanDiego", "CA"),
    ("UCDavis", "CA"), ("UCIrvine", "CA"), ("UCSC", "CA"), ("UCMerced", "CA"),
    ("UCR", "CA"), ("UBuffalo", "NY"), ("SBU", "NY"), ("UMBC", "MD"),
    ("UMassAmherst", "MA"), ("IndianaU", "IN"), ("IowaStateU", "IA"),
    ("UofIowa", "IA"), ("KU_News", "KS"), ("UMissouri", "MO"), ("UNLincoln", "NE"),
    ("UOregon", "OR"), ("USouthCarolina", "SC"), ("TexasAM", "TX"),
    ("TheU", "FL"), ("UANews", "AL"), ("ASU", "AZ"), ("UTKnoxville", "TN"),
    ("UGA", "GA"), ("UofMaryland", "MD"), ("ColoradoBoulder", "CO"),
    ("UKYnews", "KY"), ("OklahomaSooner", "OK"), ("LibertyU", "VA"),
    ("BYU", "UT"), ("HillsdaleCollg", "MI"),
];

static STATE_INDEX: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| STATES.iter().copied().collect());

/// Two-letter state code for `handle`, or `""` if the handle is not mapped.
pub fn state_for(handle: &str) -> &'static str {
    STATE_INDEX.get(handle).copied().unwrap_or("")
}
