//! 房源数据模型

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::store::{merge_field, MergePatch, Record};

pub const DEFAULT_STATUS: &str = "招租中";

/// 看房预约
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Appointment {
    pub name: String,
    pub time: String,
    pub staff: String,
    pub confirmed: bool,
}

/// 房源
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub title: String,
    pub location: String,
    pub city: String,
    pub district: String,
    pub address: String,
    /// 保留调用方给出的数值形式（整数仍是整数）
    pub price: Number,
    pub area: Number,
    pub layout: String,
    pub tags: Vec<String>,
    pub image_urls: Vec<String>,
    pub has_video: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_new: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub status: String,
    pub publish_date: String,
    pub appointments: Vec<Appointment>,
    pub description: String,
    /// (纬度, 经度)
    pub coords: (f64, f64),
}

impl Record for Property {
    fn id(&self) -> &str {
        &self.id
    }
}

/// 创建房源请求，未提供的字段使用默认值
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreatePropertyRequest {
    pub title: Option<String>,
    pub location: Option<String>,
    pub city: Option<String>,
    pub district: Option<String>,
    pub address: Option<String>,
    pub price: Option<Number>,
    pub area: Option<Number>,
    pub layout: Option<String>,
    pub tags: Option<Vec<String>>,
    pub image_urls: Option<Vec<String>>,
    pub has_video: Option<bool>,
    pub is_new: Option<bool>,
    pub video_url: Option<String>,
    pub status: Option<String>,
    pub description: Option<String>,
    pub coords: Option<(f64, f64)>,
}

impl CreatePropertyRequest {
    /// 发布日期与预约列表总是由服务端决定
    pub fn into_property(self, id: String, publish_date: String) -> Property {
        Property {
            id,
            title: self.title.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            city: self.city.unwrap_or_default(),
            district: self.district.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
            price: self.price.unwrap_or_else(|| Number::from(0)),
            area: self.area.unwrap_or_else(|| Number::from(0)),
            layout: self.layout.unwrap_or_default(),
            tags: self.tags.unwrap_or_default(),
            image_urls: self.image_urls.unwrap_or_default(),
            has_video: self.has_video.unwrap_or(false),
            is_new: Some(self.is_new.unwrap_or(false)),
            video_url: self.video_url,
            status: self.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            publish_date,
            appointments: Vec::new(),
            description: self.description.unwrap_or_default(),
            coords: self.coords.unwrap_or((0.0, 0.0)),
        }
    }
}

/// 房源局部更新，出现且非 null 的字段才会覆盖
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyPatch {
    pub title: Option<String>,
    pub location: Option<String>,
    pub city: Option<String>,
    pub district: Option<String>,
    pub address: Option<String>,
    pub price: Option<Number>,
    pub area: Option<Number>,
    pub layout: Option<String>,
    pub tags: Option<Vec<String>>,
    pub image_urls: Option<Vec<String>>,
    pub has_video: Option<bool>,
    pub is_new: Option<bool>,
    pub video_url: Option<String>,
    pub status: Option<String>,
    pub publish_date: Option<String>,
    pub description: Option<String>,
    pub coords: Option<(f64, f64)>,
}

impl MergePatch<Property> for PropertyPatch {
    fn merge_into(self, target: &mut Property) {
        merge_field(&mut target.title, self.title);
        merge_field(&mut target.location, self.location);
        merge_field(&mut target.city, self.city);
        merge_field(&mut target.district, self.district);
        merge_field(&mut target.address, self.address);
        merge_field(&mut target.price, self.price);
        merge_field(&mut target.area, self.area);
        merge_field(&mut target.layout, self.layout);
        merge_field(&mut target.tags, self.tags);
        merge_field(&mut target.image_urls, self.image_urls);
        merge_field(&mut target.has_video, self.has_video);
        merge_field(&mut target.status, self.status);
        merge_field(&mut target.publish_date, self.publish_date);
        merge_field(&mut target.description, self.description);
        merge_field(&mut target.coords, self.coords);
        if self.is_new.is_some() {
            target.is_new = self.is_new;
        }
        if self.video_url.is_some() {
            target.video_url = self.video_url;
        }
    }
}
