// Static expansion tables.
//
// Korean search-intent vocabulary for Naver. Kept as plain data so tests can
// build their own `ExpansionTables` without touching the defaults.

/// Umbrella topics and the narrower sub-topics they brainstorm into.
pub const BROAD_TOPICS: &[(&str, &[&str])] = &[
    (
        "의료 AI",
        &["루닛", "뷰노", "JLK", "딥노이드", "뇌졸중 진단 AI", "의료 영상 AI"],
    ),
    (
        "주식",
        &["미국 배당주", "ISA 계좌", "나스닥 100", "SCHD", "토스증권", "삼성전자", "엔비디아"],
    ),
    ("블로그", &["블로그 수익화", "체험단 신청", "애드포스트 현실", "지수 올리기"]),
    ("맛집", &["데이트 코스", "현지인 맛집", "가성비 오마카세", "혼밥 추천"]),
    ("여행", &["일본 여행", "다낭 여행", "환율 우대", "해외여행 준비물"]),
];

/// Substrings marking a finance/tech keyword.
pub const FINANCE_SIGNALS: &[&str] = &[
    "주식", "전자", "코인", "비트", "에코프로", "환율", "금리", "AI", "테크", "반도체",
];

/// Substrings marking a lifestyle/product keyword.
pub const LIFESTYLE_SIGNALS: &[&str] = &["맛집", "여행", "제품", "리뷰", "크림", "청소기"];

/// Shopping and review intent.
pub const REVIEW_SUFFIXES: &[&str] = &["추천", "비교", "후기", "방법", "내돈내산", "가격", "장단점"];

/// Investment, news and trend intent.
pub const INVESTMENT_SUFFIXES: &[&str] = &[
    "주가", "전망", "관련주", "배당금", "시세", "이유", "분석", "실적", "ETF",
];

/// How-to and lookup intent.
pub const INFO_SUFFIXES: &[&str] = &["하는법", "신청", "조회", "사이트", "사용법"];

/// The full set of tables the expander consults.
#[derive(Debug, Clone, Copy)]
pub struct ExpansionTables {
    pub broad_topics: &'static [(&'static str, &'static [&'static str])],
    pub finance_signals: &'static [&'static str],
    pub lifestyle_signals: &'static [&'static str],
    pub review_suffixes: &'static [&'static str],
    pub investment_suffixes: &'static [&'static str],
    pub info_suffixes: &'static [&'static str],
}

impl Default for ExpansionTables {
    fn default() -> Self {
        Self {
            broad_topics: BROAD_TOPICS,
            finance_signals: FINANCE_SIGNALS,
            lifestyle_signals: LIFESTYLE_SIGNALS,
            review_suffixes: REVIEW_SUFFIXES,
            investment_suffixes: INVESTMENT_SUFFIXES,
            info_suffixes: INFO_SUFFIXES,
        }
    }
}

impl ExpansionTables {
    /// Sub-topics for an exact broad-topic match.
    pub fn sub_topics(&self, seed: &str) -> Option<&'static [&'static str]> {
        self.broad_topics
            .iter()
            .find(|(topic, _)| *topic == seed)
            .map(|(_, subs)| *subs)
    }
}
