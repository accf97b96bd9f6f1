//! The fixed content of the cheat sheet.

pub const TITLE: &str = "C++ CP/DSA Built-ins Cheat Sheet";
pub const SUBTITLE: &str = "Competitive Programming reference for C++ STL and built-ins";
pub const AUTHOR: &str = "Author: Generated by script";
pub const QUICK_TIPS: &str = "- Use -O2 for contests. - Prefer contiguous containers for cache locality.";

/// header -> symbols it provides
pub const COMMON_HEADERS: [[&str; 2]; 11] = [
    ["<algorithm>", "sort, reverse, lower_bound, upper_bound, next_permutation"],
    ["<vector>", "std::vector"],
    ["<string>", "std::string"],
    ["<deque>", "std::deque"],
    ["<queue>", "std::priority_queue, std::queue"],
    ["<set>, <unordered_set>", "std::set, std::multiset, std::unordered_set"],
    ["<map>, <unordered_map>", "std::map, std::multimap, std::unordered_map"],
    ["<numeric>", "accumulate, gcd, lcm"],
    ["<cmath>", "sqrt, pow, ceil, floor, log"],
    ["<bitset>", "std::bitset"],
    ["<climits>, <limits>", "INT_MAX, LLONG_MAX, numeric_limits<T>"],
];

pub const NOTES: [&str; 3] = [
    "Prefer contiguous containers (vector) for cache efficiency; use reserve to avoid reallocations.",
    "Choose ordered vs unordered maps/sets based on need for ordering and typical operation count.",
    "For numeric heavy loops, consider -O2/-O3 and fast I/O setup.",
];

/// a line on the resources page, `url` is `None` for plain text
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub struct Resource {
    pub label: &'static str,
    pub url: Option<&'static str>,
    pub description: &'static str,
}

pub const RESOURCES: [Resource; 4] = [
    Resource { label: "cppreference.com", url: Some("https://en.cppreference.com/"), description: " - Comprehensive reference" },
    Resource { label: "Codeforces", url: Some("https://codeforces.com/"), description: " - Practice & contests" },
    Resource { label: "CSES", url: Some("https://cses.fi/"), description: " - Practice problems" },
    Resource { label: "Font: Segoe UI (system font). Code: Consolas or fallback monospace.", url: None, description: "" },
];

/// one topic of the sheet, lines keep their insertion order
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct Section {
    pub title: String,
    pub lines: Vec<String>,
}

impl Section {
    pub fn new<T, L, S>(title: T, lines: L) -> Self
    where
        T: Into<String>,
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Section {
            title: title.into(),
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

/// Ordered topic -> lines mapping; iteration order is rendering order
#[derive(Debug,Clone,Default,PartialEq,Eq)]
pub struct ContentCatalog {
    sections: Vec<Section>,
}

impl ContentCatalog {
    pub fn new(sections: Vec<Section>) -> Self {
        ContentCatalog { sections }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// `"1. Title"` style entries for the contents page
    pub fn contents_lines(&self) -> Vec<String> {
        self.sections
            .iter()
            .enumerate()
            .map(|(index, section)| format!("{}. {}", index + 1, section.title))
            .collect()
    }

    /// the C++ STL reference content
    pub fn cheat_sheet() -> Self {
        ContentCatalog::new(vec![
            Section::new("Arrays (algorithm)", [
                "sort(arr, arr+n); \u{2014} ascending sort",
                "sort(arr, arr+n, greater<int>()); \u{2014} descending sort",
                "binary_search(arr, arr+n, key); \u{2014} exists in sorted? bool",
                "lower_bound(arr, arr+n, key); \u{2014} first \u{2265} key (iterator)",
                "upper_bound(arr, arr+n, key); \u{2014} first > key (iterator)",
                "fill(arr, arr+n, val); \u{2014} fill range",
                "reverse(arr, arr+n); \u{2014} reverse range",
                "next_permutation(arr, arr+n); \u{2014} next lexicographic permutation",
                "prev_permutation(arr, arr+n); \u{2014} previous lexicographic permutation",
                "count(arr, arr+n, val); \u{2014} count occurrences",
                "unique(arr, arr+n); \u{2014} remove consecutive dups (returns new end)",
            ]),
            Section::new("Vector (vector, algorithm)", [
                "v.push_back(x);, v.pop_back();",
                "v.size();, v.empty();, v.clear();",
                "v.front();, v.back();",
                "v.insert(v.begin()+i, x);, v.erase(v.begin()+i);",
                "sort(v.begin(), v.end());",
                "reverse(v.begin(), v.end());",
                "lower_bound(v.begin(), v.end(), key);",
                "upper_bound(v.begin(), v.end(), key);",
                "v.assign(n, val); \u{2014} resize and fill",
                "v.resize(n);, v.reserve(cap);",
            ]),
            Section::new("String (string, algorithm)", [
                "s.size() / s.length();",
                "s.substr(pos, len);",
                "s.find(sub);, s.rfind(sub);",
                "s.replace(pos, len, str);",
                "s.insert(pos, str);, s.erase(pos, len);",
                "s.push_back(ch);, s.pop_back();",
                "transform(s.begin(), s.end(), s.begin(), ::tolower);",
                "transform(s.begin(), s.end(), s.begin(), ::toupper);",
                "stoi(s), stol(s), stoll(s), stoull(s);",
                "to_string(x);",
            ]),
            Section::new("Deque (deque)", [
                "dq.push_front(x);, dq.push_back(x);",
                "dq.pop_front();, dq.pop_back();",
                "dq.front();, dq.back();",
                "dq.size();, dq.empty();, dq.clear();",
            ]),
            Section::new("Priority Queue (queue)", [
                "priority_queue<int> pq; \u{2014} max-heap",
                "priority_queue<int, vector<int>, greater<int>> pq; \u{2014} min-heap",
                "pq.push(x);, pq.pop();, pq.top();",
                "pq.size();, pq.empty();",
            ]),
            Section::new("Set/Multiset (set, multiset)", [
                "s.insert(x);, s.erase(x or it);",
                "s.find(x);, s.count(x);",
                "s.lower_bound(x);, s.upper_bound(x);",
                "s.size();, s.empty();, s.clear();",
                "multiset allows duplicates; erase(value) removes all equal",
            ]),
            Section::new("Unordered Set (unordered_set)", [
                "us.insert(x);, us.erase(x);",
                "us.find(x);, us.count(x);",
                "Average O(1) ops, no ordering",
            ]),
            Section::new("Map (map)", [
                "m[key] = val;, m.insert({k,v});",
                "m.erase(key or it);",
                "m.find(key);, m.count(key);",
                "m.lower_bound(key);, m.upper_bound(key);",
                "Ordered by key (log n), iterates in sorted order",
            ]),
            Section::new("Unordered Map (unordered_map)", [
                "um[key] = val;, um.insert({k,v});",
                "um.erase(key);, um.find(key);, um.count(key);",
                "Average O(1), no ordering; good for freq maps/hashmaps",
            ]),
            Section::new("Math (cmath, algorithm, numeric)", [
                "abs(x);, max(a,b);, min(a,b);, swap(a,b);",
                "pow(a,b);, sqrt(x);, cbrt(x);",
                "log(x);, log10(x);, ceil(x);, floor(x);, round(x);",
                "gcd(a,b); in <numeric> (C++17+), lcm(a,b);",
                "accumulate(first, last, init); in <numeric>",
            ]),
            Section::new("Bit Ops (bit, limits)", [
                "__builtin_popcount(x); (int), __builtin_popcountll(x);",
                "__builtin_ctz(x); trailing zeros, __builtin_clz(x); leading zeros",
                "bitset<N> b; for fixed-size bit operations",
                "INT_MAX, LLONG_MAX in <climits>",
            ]),
            Section::new("I/O (fast)", [
                "ios::sync_with_stdio(false); cin.tie(nullptr);",
                "Use '\\n' for fast newline, avoid mixing scanf/printf with iostreams",
            ]),
            Section::new("Permutations/Combinatorics (algorithm)", [
                "next_permutation(v.begin(), v.end());",
                "prev_permutation(v.begin(), v.end());",
                "Generate all permutations by sorting then looping next_permutation",
            ]),
            Section::new("Useful Patterns", [
                "Sort + unique to deduplicate vector: sort(v.begin(),v.end()); v.erase(unique(v.begin(),v.end()), v.end());",
                "Binary search on answer: use while(l<r) with predicate on mid",
                "Two-pointer pattern for sorted arrays/ranges",
            ]),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cheat_sheet_has_fourteen_sections_in_order() {
        let catalog = ContentCatalog::cheat_sheet();

        assert_eq!(catalog.len(), 14);
        assert_eq!(catalog.sections()[0].title, "Arrays (algorithm)");
        assert_eq!(catalog.sections()[13].title, "Useful Patterns");
        assert_eq!(catalog.sections()[0].lines.len(), 11);
    }

    #[test]
    fn section_titles_are_unique() {
        let catalog = ContentCatalog::cheat_sheet();
        let mut titles: Vec<&str> = catalog.sections().iter().map(|s| s.title.as_str()).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), catalog.len());
    }

    #[test]
    fn contents_lines_are_numbered_from_one() {
        let catalog = ContentCatalog::new(vec![
            Section::new("A", ["x", "y"]),
            Section::new("B", ["z"]),
        ]);
        assert_eq!(catalog.contents_lines(), vec!["1. A".to_string(), "2. B".to_string()]);
    }

    #[test]
    fn catalog_text_carries_no_markup_escapes() {
        let catalog = ContentCatalog::cheat_sheet();
        for section in catalog.sections() {
            for line in &section.lines {
                assert!(!line.contains("&lt;") && !line.contains("&gt;"), "{line}");
            }
        }
    }

    #[test]
    fn io_tip_shows_an_escaped_newline() {
        let catalog = ContentCatalog::cheat_sheet();
        let lines: Vec<&String> = catalog.sections().iter().flat_map(|section| section.lines.iter()).collect();

        assert!(lines.iter().any(|line| line.starts_with("Use '\\n' for fast newline")));
        assert!(lines.iter().all(|line| !line.contains('\n')));
    }
}
