mod agenda;
mod alert;
mod contact;
mod faq;
mod footer;
mod hero;
mod key_facts;
mod location;
mod notice_board;
mod notice_card;
mod primary_button;

pub use agenda::Agenda;
pub use alert::{Alert, Severity};
pub use contact::Contact;
pub use faq::Faq;
pub use footer::Footer;
pub use hero::Hero;
pub use key_facts::KeyFacts;
pub use location::Location;
pub use notice_board::NoticeBoard;
pub use notice_card::NoticeCard;
pub use primary_button::PrimaryButton;
