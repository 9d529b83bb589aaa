//! Fixed event details shown on the info page.

pub struct Contact {
    pub phone: &'static str,
    pub person: &'static str,
}

pub struct Site {
    pub title: &'static str,
    pub date_text: &'static str,
    pub location_text: &'static str,
    pub host: &'static str,
    pub capacity: &'static str,
    /// Google Maps embed URL. Anything else hides the map.
    pub map_embed_src: &'static str,
    pub contact: Contact,
}

impl Site {
    pub fn map_src(&self) -> Option<&'static str> {
        Some(self.map_embed_src).filter(|src| src.contains("google.com/maps"))
    }
}

pub struct AgendaItem {
    pub time: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const SITE: Site = Site {
    title: "2025 진학설명회",
    date_text: "2025년 10월 30일(수) 19:00",
    location_text: "본관 5층 대강당",
    host: "광희중학교",
    capacity: "선착순 400명",
    map_embed_src: "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!...",
    contact: Contact {
        phone: "02-123-4567",
        person: "진로진학부",
    },
};

pub const AGENDA: [AgendaItem; 5] = [
    AgendaItem {
        time: "18:30",
        title: "입장 & 등록",
        description: "현장 확인 및 자료 배포",
    },
    AgendaItem {
        time: "19:00",
        title: "개회 및 안내",
        description: "행사 소개",
    },
    AgendaItem {
        time: "19:10",
        title: "대입/고입 핵심 전략",
        description: "전형 개요/변동사항",
    },
    AgendaItem {
        time: "20:00",
        title: "질의응답",
        description: "교사/진로진학부 질의응답",
    },
    AgendaItem {
        time: "20:30",
        title: "폐회",
        description: "마무리 안내",
    },
];

pub const FAQS: [Faq; 3] = [
    Faq {
        question: "누가 참석할 수 있나요?",
        answer: "학생, 학부모 모두 참석 가능합니다. 좌석이 한정되어 선착순으로 운영됩니다.",
    },
    Faq {
        question: "신청은 어떻게 하나요?",
        answer: "상단 또는 공지 카드의 “신청하기” 버튼을 클릭해 간단히 정보를 입력하면 됩니다.",
    },
    Faq {
        question: "주차가 가능한가요?",
        answer: "본관 주차장이 협소하므로 대중교통 이용을 권장드립니다.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_google_maps_embeds_are_shown() {
        assert!(SITE.map_src().is_some());

        let site = Site {
            map_embed_src: "",
            ..SITE
        };
        assert_eq!(site.map_src(), None);
    }
}
