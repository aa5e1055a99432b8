//! Compiled-in country dataset.
//!
//! The table below is the single source of truth for the picker. It lives in
//! a `static` slice and is never reordered in place: callers get their own
//! copies through [`get_all`] or [`initial_order`].

use super::country::CountryRecord;

const fn country(
    id: &'static str,
    name: &'static str,
    code: &'static str,
    flag: &'static str,
) -> CountryRecord {
    CountryRecord { id, name, code, flag }
}

static COUNTRIES: &[CountryRecord] = &[
    country("af", "Afghanistan", "93", "🇦🇫"),
    country("al", "Albania", "355", "🇦🇱"),
    country("dz", "Algeria", "213", "🇩🇿"),
    country("as", "American Samoa", "1684", "🇦🇸"),
    country("ad", "Andorra", "376", "🇦🇩"),
    country("ao", "Angola", "244", "🇦🇴"),
    country("ai", "Anguilla", "1264", "🇦🇮"),
    country("ag", "Antigua and Barbuda", "1268", "🇦🇬"),
    country("ar", "Argentina", "54", "🇦🇷"),
    country("am", "Armenia", "374", "🇦🇲"),
    country("aw", "Aruba", "297", "🇦🇼"),
    country("au", "Australia", "61", "🇦🇺"),
    country("at", "Austria", "43", "🇦🇹"),
    country("az", "Azerbaijan", "994", "🇦🇿"),
    country("bs", "Bahamas", "1242", "🇧🇸"),
    country("bh", "Bahrain", "973", "🇧🇭"),
    country("bd", "Bangladesh", "880", "🇧🇩"),
    country("bb", "Barbados", "1246", "🇧🇧"),
    country("by", "Belarus", "375", "🇧🇾"),
    country("be", "Belgium", "32", "🇧🇪"),
    country("bz", "Belize", "501", "🇧🇿"),
    country("bj", "Benin", "229", "🇧🇯"),
    country("bm", "Bermuda", "1441", "🇧🇲"),
    country("bt", "Bhutan", "975", "🇧🇹"),
    country("bo", "Bolivia", "591", "🇧🇴"),
    country("ba", "Bosnia and Herzegovina", "387", "🇧🇦"),
    country("bw", "Botswana", "267", "🇧🇼"),
    country("br", "Brazil", "55", "🇧🇷"),
    country("io", "British Indian Ocean Territory", "246", "🇮🇴"),
    country("vg", "British Virgin Islands", "1284", "🇻🇬"),
    country("bn", "Brunei", "673", "🇧🇳"),
    country("bg", "Bulgaria", "359", "🇧🇬"),
    country("bf", "Burkina Faso", "226", "🇧🇫"),
    country("bi", "Burundi", "257", "🇧🇮"),
    country("kh", "Cambodia", "855", "🇰🇭"),
    country("cm", "Cameroon", "237", "🇨🇲"),
    country("ca", "Canada", "1", "🇨🇦"),
    country("cv", "Cape Verde", "238", "🇨🇻"),
    country("bq", "Caribbean Netherlands", "599", "🇧🇶"),
    country("ky", "Cayman Islands", "1345", "🇰🇾"),
    country("cf", "Central African Republic", "236", "🇨🇫"),
    country("td", "Chad", "235", "🇹🇩"),
    country("cl", "Chile", "56", "🇨🇱"),
    country("cn", "China", "86", "🇨🇳"),
    country("cx", "Christmas Island", "61", "🇨🇽"),
    country("cc", "Cocos (Keeling) Islands", "61", "🇨🇨"),
    country("co", "Colombia", "57", "🇨🇴"),
    country("km", "Comoros", "269", "🇰🇲"),
    country("cg", "Congo", "242", "🇨🇬"),
    country("cd", "Congo (DRC)", "243", "🇨🇩"),
    country("ck", "Cook Islands", "682", "🇨🇰"),
    country("cr", "Costa Rica", "506", "🇨🇷"),
    country("ci", "Côte d'Ivoire", "225", "🇨🇮"),
    country("hr", "Croatia", "385", "🇭🇷"),
    country("cu", "Cuba", "53", "🇨🇺"),
    country("cw", "Curaçao", "599", "🇨🇼"),
    country("cy", "Cyprus", "357", "🇨🇾"),
    country("cz", "Czech Republic", "420", "🇨🇿"),
    country("dk", "Denmark", "45", "🇩🇰"),
    country("dj", "Djibouti", "253", "🇩🇯"),
    country("dm", "Dominica", "1767", "🇩🇲"),
    country("do", "Dominican Republic", "1809", "🇩🇴"),
    country("ec", "Ecuador", "593", "🇪🇨"),
    country("eg", "Egypt", "20", "🇪🇬"),
    country("sv", "El Salvador", "503", "🇸🇻"),
    country("gq", "Equatorial Guinea", "240", "🇬🇶"),
    country("er", "Eritrea", "291", "🇪🇷"),
    country("ee", "Estonia", "372", "🇪🇪"),
    country("sz", "Eswatini", "268", "🇸🇿"),
    country("et", "Ethiopia", "251", "🇪🇹"),
    country("fk", "Falkland Islands", "500", "🇫🇰"),
    country("fo", "Faroe Islands", "298", "🇫🇴"),
    country("fj", "Fiji", "679", "🇫🇯"),
    country("fi", "Finland", "358", "🇫🇮"),
    country("fr", "France", "33", "🇫🇷"),
    country("gf", "French Guiana", "594", "🇬🇫"),
    country("pf", "French Polynesia", "689", "🇵🇫"),
    country("ga", "Gabon", "241", "🇬🇦"),
    country("gm", "Gambia", "220", "🇬🇲"),
    country("ge", "Georgia", "995", "🇬🇪"),
    country("de", "Germany", "49", "🇩🇪"),
    country("gh", "Ghana", "233", "🇬🇭"),
    country("gi", "Gibraltar", "350", "🇬🇮"),
    country("gr", "Greece", "30", "🇬🇷"),
    country("gl", "Greenland", "299", "🇬🇱"),
    country("gd", "Grenada", "1473", "🇬🇩"),
    country("gp", "Guadeloupe", "590", "🇬🇵"),
    country("gu", "Guam", "1671", "🇬🇺"),
    country("gt", "Guatemala", "502", "🇬🇹"),
    country("gg", "Guernsey", "44", "🇬🇬"),
    country("gn", "Guinea", "224", "🇬🇳"),
    country("gw", "Guinea-Bissau", "245", "🇬🇼"),
    country("gy", "Guyana", "592", "🇬🇾"),
    country("ht", "Haiti", "509", "🇭🇹"),
    country("hn", "Honduras", "504", "🇭🇳"),
    country("hk", "Hong Kong", "852", "🇭🇰"),
    country("hu", "Hungary", "36", "🇭🇺"),
    country("is", "Iceland", "354", "🇮🇸"),
    country("in", "India", "91", "🇮🇳"),
    country("id", "Indonesia", "62", "🇮🇩"),
    country("ir", "Iran", "98", "🇮🇷"),
    country("iq", "Iraq", "964", "🇮🇶"),
    country("ie", "Ireland", "353", "🇮🇪"),
    country("im", "Isle of Man", "44", "🇮🇲"),
    country("il", "Israel", "972", "🇮🇱"),
    country("it", "Italy", "39", "🇮🇹"),
    country("jm", "Jamaica", "1876", "🇯🇲"),
    country("jp", "Japan", "81", "🇯🇵"),
    country("je", "Jersey", "44", "🇯🇪"),
    country("jo", "Jordan", "962", "🇯🇴"),
    country("kz", "Kazakhstan", "7", "🇰🇿"),
    country("ke", "Kenya", "254", "🇰🇪"),
    country("ki", "Kiribati", "686", "🇰🇮"),
    country("xk", "Kosovo", "383", "🇽🇰"),
    country("kw", "Kuwait", "965", "🇰🇼"),
    country("kg", "Kyrgyzstan", "996", "🇰🇬"),
    country("la", "Laos", "856", "🇱🇦"),
    country("lv", "Latvia", "371", "🇱🇻"),
    country("lb", "Lebanon", "961", "🇱🇧"),
    country("ls", "Lesotho", "266", "🇱🇸"),
    country("lr", "Liberia", "231", "🇱🇷"),
    country("ly", "Libya", "218", "🇱🇾"),
    country("li", "Liechtenstein", "423", "🇱🇮"),
    country("lt", "Lithuania", "370", "🇱🇹"),
    country("lu", "Luxembourg", "352", "🇱🇺"),
    country("mo", "Macau", "853", "🇲🇴"),
    country("mg", "Madagascar", "261", "🇲🇬"),
    country("mw", "Malawi", "265", "🇲🇼"),
    country("my", "Malaysia", "60", "🇲🇾"),
    country("mv", "Maldives", "960", "🇲🇻"),
    country("ml", "Mali", "223", "🇲🇱"),
    country("mt", "Malta", "356", "🇲🇹"),
    country("mh", "Marshall Islands", "692", "🇲🇭"),
    country("mq", "Martinique", "596", "🇲🇶"),
    country("mr", "Mauritania", "222", "🇲🇷"),
    country("mu", "Mauritius", "230", "🇲🇺"),
    country("yt", "Mayotte", "262", "🇾🇹"),
    country("mx", "Mexico", "52", "🇲🇽"),
    country("fm", "Micronesia", "691", "🇫🇲"),
    country("md", "Moldova", "373", "🇲🇩"),
    country("mc", "Monaco", "377", "🇲🇨"),
    country("mn", "Mongolia", "976", "🇲🇳"),
    country("me", "Montenegro", "382", "🇲🇪"),
    country("ms", "Montserrat", "1664", "🇲🇸"),
    country("ma", "Morocco", "212", "🇲🇦"),
    country("mz", "Mozambique", "258", "🇲🇿"),
    country("mm", "Myanmar", "95", "🇲🇲"),
    country("na", "Namibia", "264", "🇳🇦"),
    country("nr", "Nauru", "674", "🇳🇷"),
    country("np", "Nepal", "977", "🇳🇵"),
    country("nl", "Netherlands", "31", "🇳🇱"),
    country("nc", "New Caledonia", "687", "🇳🇨"),
    country("nz", "New Zealand", "64", "🇳🇿"),
    country("ni", "Nicaragua", "505", "🇳🇮"),
    country("ne", "Niger", "227", "🇳🇪"),
    country("ng", "Nigeria", "234", "🇳🇬"),
    country("nu", "Niue", "683", "🇳🇺"),
    country("nf", "Norfolk Island", "672", "🇳🇫"),
    country("kp", "North Korea", "850", "🇰🇵"),
    country("mk", "North Macedonia", "389", "🇲🇰"),
    country("mp", "Northern Mariana Islands", "1670", "🇲🇵"),
    country("no", "Norway", "47", "🇳🇴"),
    country("om", "Oman", "968", "🇴🇲"),
    country("pk", "Pakistan", "92", "🇵🇰"),
    country("pw", "Palau", "680", "🇵🇼"),
    country("ps", "Palestine", "970", "🇵🇸"),
    country("pa", "Panama", "507", "🇵🇦"),
    country("pg", "Papua New Guinea", "675", "🇵🇬"),
    country("py", "Paraguay", "595", "🇵🇾"),
    country("pe", "Peru", "51", "🇵🇪"),
    country("ph", "Philippines", "63", "🇵🇭"),
    country("pl", "Poland", "48", "🇵🇱"),
    country("pt", "Portugal", "351", "🇵🇹"),
    country("pr", "Puerto Rico", "1787", "🇵🇷"),
    country("qa", "Qatar", "974", "🇶🇦"),
    country("re", "Réunion", "262", "🇷🇪"),
    country("ro", "Romania", "40", "🇷🇴"),
    country("ru", "Russia", "7", "🇷🇺"),
    country("rw", "Rwanda", "250", "🇷🇼"),
    country("bl", "Saint Barthélemy", "590", "🇧🇱"),
    country("sh", "Saint Helena", "290", "🇸🇭"),
    country("kn", "Saint Kitts and Nevis", "1869", "🇰🇳"),
    country("lc", "Saint Lucia", "1758", "🇱🇨"),
    country("mf", "Saint Martin", "590", "🇲🇫"),
    country("pm", "Saint Pierre and Miquelon", "508", "🇵🇲"),
    country("vc", "Saint Vincent and the Grenadines", "1784", "🇻🇨"),
    country("ws", "Samoa", "685", "🇼🇸"),
    country("sm", "San Marino", "378", "🇸🇲"),
    country("st", "São Tomé and Príncipe", "239", "🇸🇹"),
    country("sa", "Saudi Arabia", "966", "🇸🇦"),
    country("sn", "Senegal", "221", "🇸🇳"),
    country("rs", "Serbia", "381", "🇷🇸"),
    country("sc", "Seychelles", "248", "🇸🇨"),
    country("sl", "Sierra Leone", "232", "🇸🇱"),
    country("sg", "Singapore", "65", "🇸🇬"),
    country("sx", "Sint Maarten", "1721", "🇸🇽"),
    country("sk", "Slovakia", "421", "🇸🇰"),
    country("si", "Slovenia", "386", "🇸🇮"),
    country("sb", "Solomon Islands", "677", "🇸🇧"),
    country("so", "Somalia", "252", "🇸🇴"),
    country("za", "South Africa", "27", "🇿🇦"),
    country("kr", "South Korea", "82", "🇰🇷"),
    country("ss", "South Sudan", "211", "🇸🇸"),
    country("es", "Spain", "34", "🇪🇸"),
    country("lk", "Sri Lanka", "94", "🇱🇰"),
    country("sd", "Sudan", "249", "🇸🇩"),
    country("sr", "Suriname", "597", "🇸🇷"),
    country("sj", "Svalbard and Jan Mayen", "47", "🇸🇯"),
    country("se", "Sweden", "46", "🇸🇪"),
    country("ch", "Switzerland", "41", "🇨🇭"),
    country("sy", "Syria", "963", "🇸🇾"),
    country("tw", "Taiwan", "886", "🇹🇼"),
    country("tj", "Tajikistan", "992", "🇹🇯"),
    country("tz", "Tanzania", "255", "🇹🇿"),
    country("th", "Thailand", "66", "🇹🇭"),
    country("tl", "Timor-Leste", "670", "🇹🇱"),
    country("tg", "Togo", "228", "🇹🇬"),
    country("tk", "Tokelau", "690", "🇹🇰"),
    country("to", "Tonga", "676", "🇹🇴"),
    country("tt", "Trinidad and Tobago", "1868", "🇹🇹"),
    country("tn", "Tunisia", "216", "🇹🇳"),
    country("tr", "Turkey", "90", "🇹🇷"),
    country("tm", "Turkmenistan", "993", "🇹🇲"),
    country("tc", "Turks and Caicos Islands", "1649", "🇹🇨"),
    country("tv", "Tuvalu", "688", "🇹🇻"),
    country("vi", "U.S. Virgin Islands", "1340", "🇻🇮"),
    country("ug", "Uganda", "256", "🇺🇬"),
    country("ua", "Ukraine", "380", "🇺🇦"),
    country("ae", "United Arab Emirates", "971", "🇦🇪"),
    country("gb", "United Kingdom", "44", "🇬🇧"),
    country("us", "United States", "1", "🇺🇸"),
    country("uy", "Uruguay", "598", "🇺🇾"),
    country("uz", "Uzbekistan", "998", "🇺🇿"),
    country("vu", "Vanuatu", "678", "🇻🇺"),
    country("va", "Vatican City", "39", "🇻🇦"),
    country("ve", "Venezuela", "58", "🇻🇪"),
    country("vn", "Vietnam", "84", "🇻🇳"),
    country("wf", "Wallis and Futuna", "681", "🇼🇫"),
    country("eh", "Western Sahara", "212", "🇪🇭"),
    country("ye", "Yemen", "967", "🇾🇪"),
    country("zm", "Zambia", "260", "🇿🇲"),
    country("zw", "Zimbabwe", "263", "🇿🇼"),
];

/// Returns a snapshot of every supported country/dial-code pair.
///
/// Records come back in table order (alphabetical by name). The returned
/// vector is owned by the caller; mutating it has no effect on the table.
#[must_use]
pub fn get_all() -> Vec<CountryRecord> {
    COUNTRIES.to_vec()
}

/// Returns the dataset sorted for first display.
///
/// Ordering is ascending by `code` compared as a string, then by `name`.
/// String comparison means `"1264"` sorts before `"44"`.
///
/// # Examples
///
/// ```
/// use dialpick::domain::dataset;
///
/// let ordered = dataset::initial_order();
/// assert!(ordered.windows(2).all(|w| (w[0].code, w[0].name) <= (w[1].code, w[1].name)));
/// ```
#[must_use]
pub fn initial_order() -> Vec<CountryRecord> {
    let mut records = get_all();
    records.sort_by(|a, b| a.code.cmp(b.code).then_with(|| a.name.cmp(b.name)));
    records
}
