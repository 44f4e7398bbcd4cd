//! The master school list.
//!
//! This is the authoritative set of entities: every output record comes from
//! exactly one entry here, in this order, and no source can add to it.

use std::fmt;

/// A US News national rank, or a textual marker for schools outside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rank {
    Ranked(u32),
    Unranked(&'static str),
}

impl Rank {
    /// Placeholder written to `rank` when the school has no numeric rank.
    pub const UNRANKED_SORT_VALUE: u32 = 999;

    pub fn position(&self) -> Option<u32> {
        match self {
            Rank::Ranked(r) => Some(*r),
            Rank::Unranked(_) => None,
        }
    }

    /// Numeric rank used for sorting, with unranked schools sent to the end.
    pub fn sort_value(&self) -> u32 {
        self.position().unwrap_or(Self::UNRANKED_SORT_VALUE)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Ranked(r) => write!(f, "{r}"),
            Rank::Unranked(label) => f.write_str(label),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryEntry {
    /// Twitter handle; the join key for every source.
    pub handle: &'static str,
    pub rank: Rank,
    pub name: &'static str,
    pub highlight: bool,
    /// Employer keyword used when the donation scraper searched FEC filings.
    pub fec_keyword: &'static str,
}

const fn ranked(
    handle: &'static str,
    rank: u32,
    name: &'static str,
    fec_keyword: &'static str,
) -> RegistryEntry {
    RegistryEntry {
        handle,
        rank: Rank::Ranked(rank),
        name,
        highlight: false,
        fec_keyword,
    }
}

const fn highlighted(
    handle: &'static str,
    marker: &'static str,
    name: &'static str,
    fec_keyword: &'static str,
) -> RegistryEntry {
    RegistryEntry {
        handle,
        rank: Rank::Unranked(marker),
        name,
        highlight: true,
        fec_keyword,
    }
}

pub static MASTER_SCHOOLS: &[RegistryEntry] = &[
    ranked("Princeton", 1, "Princeton University", "PRINCETON UNIVERSITY"),
    ranked("MIT", 2, "Massachusetts Institute of Technology", "MASSACHUSETTS INSTITUTE OF TECHNOLOGY"),
    ranked("Harvard", 3, "Harvard University", "HARVARD UNIVERSITY"),
    ranked("Stanford", 4, "Stanford University", "STANFORD UNIVERSITY"),
    ranked("Yale", 5, "Yale University", "YALE UNIVERSITY"),
    ranked("CalTech", 6, "California Institute of Technology", "CALIFORNIA INSTITUTE OF TECHNOLOGY"),
    ranked("DukeU", 7, "Duke University", "DUKE UNIVERSITY"),
    ranked("JohnsHopkins", 8, "Johns Hopkins University", "JOHNS HOPKINS UNIVERSITY"),
    ranked("NorthwesternU", 9, "Northwestern University", "NORTHWESTERN UNIVERSITY"),
    ranked("Penn", 10, "University of Pennsylvania", "UNIVERSITY OF PENNSYLVANIA"),
    ranked("Columbia", 11, "Columbia University", "COLUMBIA UNIVERSITY"),
    ranked("UChicago", 12, "University of Chicago", "UNIVERSITY OF CHICAGO"),
    ranked("Cornell", 13, "Cornell University", "CORNELL UNIVERSITY"),
    ranked("BrownU", 14, "Brown University", "BROWN UNIVERSITY"),
    ranked("UCLA", 15, "University of California, Los Angeles", "UCLA"),
    ranked("Rice", 16, "Rice University", "RICE UNIVERSITY"),
    ranked("Dartmouth", 17, "Dartmouth College", "DARTMOUTH COLLEGE"),
    ranked("UCBerkeley", 17, "University of California, Berkeley", "UNIVERSITY OF CALIFORNIA BERKELEY"),
    ranked("Vanderbilt", 19, "Vanderbilt University", "VANDERBILT UNIVERSITY"),
    ranked("NotreDame", 20, "University of Notre Dame", "UNIVERSITY OF NOTRE DAME"),
    ranked("UMich", 21, "University of Michigan", "UNIVERSITY OF MICHIGAN"),
    ranked("Georgetown", 22, "Georgetown University", "GEORGETOWN UNIVERSITY"),
    ranked("UNC", 22, "University of North Carolina at Chapel Hill", "UNIVERSITY OF NORTH CAROLINA"),
    ranked("Carnegie_Mellon", 24, "Carnegie Mellon University", "CARNEGIE MELLON UNIVERSITY"),
    ranked("EmoryUniversity", 24, "Emory University", "EMORY UNIVERSITY"),
    ranked("UVA", 24, "University of Virginia", "UNIVERSITY OF VIRGINIA"),
    ranked("WashU", 24, "Washington University in St. Louis", "WASHINGTON UNIVERSITY"),
    ranked("UCSanDiego", 28, "University of California, San Diego", "UNIVERSITY OF CALIFORNIA SAN DIEGO"),
    ranked("UCDavis", 28, "University of California, Davis", "UNIVERSITY OF CALIFORNIA DAVIS"),
    ranked("UFlorida", 30, "University of Florida", "UNIVERSITY OF FLORIDA"),
    ranked("UTexasAustin", 30, "University of Texas at Austin", "UNIVERSITY OF TEXAS AT AUSTIN"),
    ranked("USC_", 30, "University of Southern California", "UNIVERSITY OF SOUTHERN CALIFORNIA"),
    ranked("GTechNews", 33, "Georgia Institute of Technology", "GEORGIA INSTITUTE OF TECHNOLOGY"),
    ranked("UCIrvine", 33, "University of California, Irvine", "UNIVERSITY OF CALIFORNIA IRVINE"),
    ranked("NYU", 35, "New York University", "NEW YORK UNIVERSITY"),
    ranked("UCSB", 35, "University of California, Santa Barbara", "UNIVERSITY OF CALIFORNIA SANTA BARBARA"),
    ranked("UofIllinois", 35, "University of Illinois Urbana-Champaign", "UNIVERSITY OF ILLINOIS"),
    ranked("UWMadison", 39, "University of Wisconsin-Madison", "UNIVERSITY OF WISCONSIN"),
    ranked("BostonCollege", 39, "Boston College", "BOSTON COLLEGE"),
    ranked("TuftsUniversity", 37, "Tufts University", "TUFTS UNIVERSITY"),
    ranked("BostonU", 41, "Boston University", "BOSTON UNIVERSITY"),
    ranked("OhioState", 41, "The Ohio State University", "OHIO STATE UNIVERSITY"),
    ranked("RutgersU", 41, "Rutgers University-New Brunswick", "RUTGERS UNIVERSITY"),
    ranked("UofMaryland", 44, "University of Maryland, College Park", "UNIVERSITY OF MARYLAND"),
    ranked("UROCHESTERnews", 44, "University of Rochester", "UNIVERSITY OF ROCHESTER"),
    ranked("LifeAtPurdue", 46, "Purdue University", "PURDUE UNIVERSITY"),
    ranked("UGA", 46, "University of Georgia", "UNIVERSITY OF GEORGIA"),
    ranked("UWashington", 46, "University of Washington", "UNIVERSITY OF WASHINGTON"),
    ranked("CaseWestern", 51, "Case Western Reserve University", "CASE WESTERN RESERVE UNIVERSITY"),
    ranked("TexasAM", 51, "Texas A&M University", "TEXAS A&M UNIVERSITY"),
    ranked("VirginiaTech", 51, "Virginia Tech", "VIRGINIA TECH"),
    ranked("WakeForestU", 46, "Wake Forest University", "WAKE FOREST UNIVERSITY"),
    ranked("WilliamandMary", 54, "William & Mary", "COLLEGE OF WILLIAM AND MARY"),
    ranked("FloridaState", 54, "Florida State University", "FLORIDA STATE UNIVERSITY"),
    ranked("NortheasternU", 54, "Northeastern University", "NORTHEASTERN UNIVERSITY"),
    ranked("UMNews", 54, "University of Minnesota, Twin Cities", "UNIVERSITY OF MINNESOTA"),
    ranked("StevensInst", 58, "Stevens Institute of Technology", "STEVENS INSTITUTE OF TECHNOLOGY"),
    ranked("UConn", 58, "University of Connecticut", "UNIVERSITY OF CONNECTICUT"),
    ranked("GeorgeWashU", 62, "George Washington University", "GEORGE WASHINGTON UNIVERSITY"),
    ranked("TulaneU", 63, "Tulane University", "TULANE UNIVERSITY"),
    ranked("UMassAmherst", 58, "University of Massachusetts Amherst", "UNIVERSITY OF MASSACHUSETTS AMHERST"),
    ranked("BrandeisU", 63, "Brandeis University", "BRANDEIS UNIVERSITY"),
    ranked("UnivOfMiami", 67, "University of Miami", "UNIVERSITY OF MIAMI"),
    ranked("VillanovaU", 67, "Villanova University", "VILLANOVA UNIVERSITY"),
    ranked("PittTweet", 70, "University of Pittsburgh", "UNIVERSITY OF PITTSBURGH"),
    ranked("SyracuseU", 70, "Syracuse University", "SYRACUSE UNIVERSITY"),
    ranked("IndianaU", 73, "Indiana University Bloomington", "INDIANA UNIVERSITY"),
    ranked("UCR", 73, "University of California, Riverside", "UNIVERSITY OF CALIFORNIA RIVERSIDE"),
    ranked("ColoradoMines", 76, "Colorado School of Mines", "COLORADO SCHOOL OF MINES"),
    ranked("UBuffalo", 76, "University at Buffalo", "UNIVERSITY AT BUFFALO"),
    ranked("SBU", 58, "Stony Brook University", "STONY BROOK UNIVERSITY"),
    ranked("UCMerced", 87, "University of California, Merced", "UNIVERSITY OF CALIFORNIA MERCED"),
    ranked("UDelaware", 89, "University of Delaware", "UNIVERSITY OF DELAWARE"),
    ranked("SouthMethodistU", 89, "Southern Methodist University", "SOUTHERN METHODIST UNIVERSITY"),
    ranked("UofIowa", 93, "University of Iowa", "UNIVERSITY OF IOWA"),
    ranked("BaylorU", 93, "Baylor University", "BAYLOR UNIVERSITY"),
    ranked("UCSC", 97, "University of California, Santa Cruz", "UNIVERSITY OF CALIFORNIA SANTA CRUZ"),
    ranked("Clemson", 98, "Clemson University", "CLEMSON UNIVERSITY"),
    ranked("American_U", 98, "American University", "AMERICAN UNIVERSITY"),
    ranked("DrexelU", 98, "Drexel University", "DREXEL UNIVERSITY"),
    ranked("FordhamNYC", 100, "Fordham University", "FORDHAM UNIVERSITY"),
    ranked("GonzagaU", 104, "Gonzaga University", "GONZAGA UNIVERSITY"),
    ranked("ASU", 105, "Arizona State University", "ARIZONA STATE UNIVERSITY"),
    ranked("ColoradoBoulder", 105, "University of Colorado Boulder", "UNIVERSITY OF COLORADO"),
    ranked("UOregon", 105, "University of Oregon", "UNIVERSITY OF OREGON"),
    ranked("UTKnoxville", 105, "University of Tennessee, Knoxville", "UNIVERSITY OF TENNESSEE"),
    ranked("Auburn", 105, "Auburn University", "AUBURN UNIVERSITY"),
    ranked("KU_News", 105, "University of Kansas", "UNIVERSITY OF KANSAS"),
    ranked("LoyolaChicago", 115, "Loyola University Chicago", "LOYOLA UNIVERSITY CHICAGO"),
    ranked("HowardU", 115, "Howard University", "HOWARD UNIVERSITY"),
    ranked("USouthCarolina", 121, "University of South Carolina", "UNIVERSITY OF SOUTH CAROLINA"),
    ranked("IowaStateU", 121, "Iowa State University", "IOWA STATE UNIVERSITY"),
    ranked("UMBC", 124, "University of Maryland, Baltimore County", "UNIVERSITY OF MARYLAND BALTIMORE COUNTY"),
    ranked("UMissouri", 124, "University of Missouri", "UNIVERSITY OF MISSOURI"),
    ranked("UKYnews", 127, "University of Kentucky", "UNIVERSITY OF KENTUCKY"),
    ranked("OklahomaSooner", 127, "University of Oklahoma", "UNIVERSITY OF OKLAHOMA"),
    ranked("NJIT", 127, "New Jersey Institute of Technology", "NEW JERSEY INSTITUTE OF TECHNOLOGY"),
    ranked("TheU", 133, "Florida International University", "FLORIDA INTERNATIONAL UNIVERSITY"),
    ranked("templemade", 133, "Temple University", "TEMPLE UNIVERSITY"),
    ranked("Creighton", 133, "Creighton University", "CREIGHTON UNIVERSITY"),
    ranked("UNLincoln", 150, "University of Nebraska-Lincoln", "UNIVERSITY OF NEBRASKA"),
    ranked("UANews", 150, "University of Alabama", "UNIVERSITY OF ALABAMA"),
    highlighted("HillsdaleCollg", "NR", "Hillsdale College", "HILLSDALE COLLEGE"),
    highlighted("LibertyU", "NR", "Liberty University", "LIBERTY UNIVERSITY"),
    highlighted("BYU", "NR", "Brigham Young University", "BRIGHAM YOUNG UNIVERSITY"),
];

/// The built-in registry.
pub fn master_schools() -> &'static [RegistryEntry] {
    MASTER_SCHOOLS
}
