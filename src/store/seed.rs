//! 启动时的演示数据

use serde_json::Number;

use crate::app::landlord::model::LandlordConfig;
use crate::app::property::model::{Appointment, Property, DEFAULT_STATUS};
use crate::app::user::model::User;

const DESCRIPTION: &str = "【精品单身公寓】位于核心地段，周边配套齐全，交通便利。房间采光通透，现代简约装修风格，配备全套品牌家电（空调、热水器、冰箱、洗衣机等），真正实现拎包入住。公寓提供24小时安保巡逻及智能化门禁系统，环境安全舒适，是追求生活品质的都市精英及学子的理想居所。";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn float(value: f64) -> Number {
    Number::from_f64(value).unwrap_or_else(|| Number::from(0))
}

pub fn properties() -> Vec<Property> {
    vec![
        Property {
            id: "YW-2024001".to_string(),
            title: "义乌北苑 精装一室一卫".to_string(),
            location: "北苑街道".to_string(),
            city: "金华市".to_string(),
            district: "义乌市".to_string(),
            address: "浙江省金华市义乌市北苑路88号".to_string(),
            price: Number::from(1800),
            area: float(35.0),
            layout: "1室1卫".to_string(),
            tags: strings(&["空调", "衣柜", "热水器", "WiFi", "冰箱", "油烟机"]),
            image_urls: strings(&[
                "/assets/images/google/property-1.jpg",
                "https://picsum.photos/seed/p1/800/600",
                "https://picsum.photos/seed/p2/800/600",
            ]),
            has_video: true,
            is_new: None,
            video_url: None,
            status: DEFAULT_STATUS.to_string(),
            publish_date: "2024-01-20".to_string(),
            appointments: vec![Appointment {
                name: "王女士 (个人)".to_string(),
                time: "明天 14:30".to_string(),
                staff: "小张".to_string(),
                confirmed: true,
            }],
            description: DESCRIPTION.to_string(),
            coords: (29.3242, 120.0673),
        },
        Property {
            id: "YW-2024105".to_string(),
            title: "福田二区 现代简约两室一卫".to_string(),
            location: "福田街道".to_string(),
            city: "金华市".to_string(),
            district: "义乌市".to_string(),
            address: "浙江省金华市义乌市福田二区25栋".to_string(),
            price: Number::from(3200),
            area: Number::from(65),
            layout: "2室1卫".to_string(),
            tags: strings(&["空调", "衣柜", "热水器", "WiFi", "冰箱", "油烟机", "洗衣机"]),
            image_urls: strings(&[
                "/assets/images/google/property-2.jpg",
                "https://picsum.photos/seed/p3/800/600",
            ]),
            has_video: true,
            is_new: Some(true),
            video_url: None,
            status: DEFAULT_STATUS.to_string(),
            publish_date: "2024-02-15".to_string(),
            appointments: Vec::new(),
            description: DESCRIPTION.to_string(),
            coords: (29.3361, 120.0912),
        },
        Property {
            id: "YW-2024106".to_string(),
            title: "稠江街道 舒适大三居".to_string(),
            location: "稠江街道".to_string(),
            city: "金华市".to_string(),
            district: "义乌市".to_string(),
            address: "浙江省金华市义乌市稠江街道万达广场旁".to_string(),
            price: Number::from(4500),
            area: Number::from(110),
            layout: "3室2卫".to_string(),
            tags: strings(&["空调", "衣柜", "热水器", "WiFi", "冰箱", "洗衣机", "床"]),
            image_urls: strings(&[
                "https://picsum.photos/seed/p4/800/600",
                "https://picsum.photos/seed/p5/800/600",
            ]),
            has_video: false,
            is_new: None,
            video_url: None,
            status: DEFAULT_STATUS.to_string(),
            publish_date: "2024-03-01".to_string(),
            appointments: Vec::new(),
            description: DESCRIPTION.to_string(),
            coords: (29.2895, 120.0485),
        },
    ]
}

pub fn users() -> Vec<User> {
    let user = |id: &str, name: &str, phone: &str, source: &str, auth: &str, time: &str| User {
        id: id.to_string(),
        name: name.to_string(),
        phone: phone.to_string(),
        source_property: source.to_string(),
        auth_status: auth.to_string(),
        create_time: time.to_string(),
    };

    vec![
        user("U001", "张美玲", "138****5566", "义乌北苑 精装一室一卫", "已实名", "2024-03-20 14:30"),
        user("U002", "李伟强", "159****8822", "福田二区 现代简约两室一卫", "已实名", "2024-03-21 09:15"),
        user("U003", "陈小芳", "133****1144", "义乌北苑 精装一室一卫", "待认证", "2024-03-22 18:05"),
    ]
}

pub fn landlord_config() -> LandlordConfig {
    LandlordConfig {
        name: "李先生".to_string(),
        avatar: "/assets/images/google/avatar.jpg".to_string(),
        phone: "13888888888".to_string(),
        wechat_id: "HousePlatform_Service".to_string(),
        qr_code_url: String::new(),
        password: "admin".to_string(),
    }
}
