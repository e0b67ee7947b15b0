//! Quick-start suggestions offered before the first message

use serde::{Deserialize, Serialize};
use shared::Category;

/// A one-tap suggestion with a canned reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickAction {
    CompanySite,
    OnlineStore,
    PersonalBlog,
    RestaurantSite,
    Portfolio,
    ServicesSite,
}

impl QuickAction {
    pub const ALL: [QuickAction; 6] = [
        QuickAction::CompanySite,
        QuickAction::OnlineStore,
        QuickAction::PersonalBlog,
        QuickAction::RestaurantSite,
        QuickAction::Portfolio,
        QuickAction::ServicesSite,
    ];

    /// Text shown on the suggestion chip
    pub fn label(&self) -> &'static str {
        match self {
            QuickAction::CompanySite => "موقع شركة",
            QuickAction::OnlineStore => "متجر إلكتروني",
            QuickAction::PersonalBlog => "مدونة شخصية",
            QuickAction::RestaurantSite => "موقع مطعم",
            QuickAction::Portfolio => "معرض أعمال",
            QuickAction::ServicesSite => "موقع خدمات",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            QuickAction::CompanySite | QuickAction::ServicesSite => Category::Business,
            QuickAction::OnlineStore => Category::Shop,
            QuickAction::PersonalBlog | QuickAction::Portfolio => Category::Portfolio,
            QuickAction::RestaurantSite => Category::Restaurant,
        }
    }

    pub fn reply(&self) -> &'static str {
        match self {
            QuickAction::CompanySite => "ممتاز! سأبني لك موقع شركة احترافي. ما اسم شركتك؟",
            QuickAction::OnlineStore => "رائع! سأنشئ لك متجر إلكتروني مميز. ما اسم متجرك؟",
            QuickAction::PersonalBlog => "عظيم! سأبني لك موقع شخصي لعرض أعمالك. ما اسمك أو اسم مدونتك؟",
            QuickAction::RestaurantSite => "ممتاز! سأنشئ لك موقع مطعم احترافي. ما اسم مطعمك؟",
            QuickAction::Portfolio => "رائع! سأبني لك معرض أعمال يعكس إبداعك. ما اسمك أو اسم معرضك؟",
            QuickAction::ServicesSite => "عظيم! سأنشئ لك موقع خدمات مهني. ما اسم شركتك أو مؤسستك؟",
        }
    }
}
