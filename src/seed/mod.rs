//! Demo fixtures: the hard-coded data the mobile screens ship with.

use crate::models::{
    Author, Comment, ExchangeRecord, OrderStatus, Post, PostCategory, Product, ProductCategory,
    UserProfile,
};
use crate::store::InitialState;

/// Points balance of the demo user.
pub const DEMO_BALANCE: u32 = 1280;

/// The complete demo state, ready for [`crate::Store::with_initial`].
pub fn demo_state() -> InitialState {
    InitialState {
        posts: demo_posts(),
        products: demo_products(),
        records: demo_records(),
        balance: DEMO_BALANCE,
        profile: Some(demo_profile()),
    }
}

pub fn demo_profile() -> UserProfile {
    UserProfile {
        address: "北京市海淀区中关村大街1号".to_string(),
        phone: "138****1234".to_string(),
    }
}

pub fn demo_posts() -> Vec<Post> {
    vec![
        Post {
            id: "1".to_string(),
            title: "如何高效清洁厨房？".to_string(),
            content: "分享一些实用的厨房清洁技巧，包括油烟机、灶台和地面的清洁方法...".to_string(),
            category: PostCategory::CleaningTips,
            tags: vec![
                "厨房".to_string(),
                "日常清洁".to_string(),
                "深度清洁".to_string(),
            ],
            author: Author {
                name: "张妈妈".to_string(),
                level: "家务达人".to_string(),
                avatar: None,
            },
            timestamp: "2024-06-10T06:00:00+00:00".to_string(),
            likes: 128,
            comments: vec![Comment {
                id: "1".to_string(),
                author: "李爸爸".to_string(),
                content: "很实用的方法，学习了！".to_string(),
                timestamp: "2024-06-10T07:00:00+00:00".to_string(),
            }],
        },
        Post {
            id: "2".to_string(),
            title: "一周晚餐计划分享".to_string(),
            content: "这是我的一周晚餐计划，每天不重样，营养均衡...".to_string(),
            category: PostCategory::Cooking,
            tags: vec![
                "厨房".to_string(),
                "时间规划".to_string(),
                "效率提升".to_string(),
            ],
            author: Author {
                name: "美食爱好者".to_string(),
                level: "中级".to_string(),
                avatar: None,
            },
            timestamp: "2024-06-10T04:00:00+00:00".to_string(),
            likes: 256,
            comments: vec![Comment {
                id: "2".to_string(),
                author: "王妈妈".to_string(),
                content: "太棒了，收藏了！".to_string(),
                timestamp: "2024-06-10T06:00:00+00:00".to_string(),
            }],
        },
    ]
}

pub fn demo_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            name: "多功能清洁套装".to_string(),
            description: "包含拖把、扫把、抹布等清洁工具".to_string(),
            points: 500,
            category: ProductCategory::CleaningSupplies,
            stock: 10,
            sales: 128,
        },
        Product {
            id: "2".to_string(),
            name: "智能收纳盒".to_string(),
            description: "可折叠收纳，节省空间".to_string(),
            points: 300,
            category: ProductCategory::StorageTools,
            stock: 15,
            sales: 256,
        },
        Product {
            id: "3".to_string(),
            name: "厨房调味料套装".to_string(),
            description: "包含常用调味料，品质保证".to_string(),
            points: 800,
            category: ProductCategory::Kitchenware,
            stock: 5,
            sales: 89,
        },
    ]
}

pub fn demo_records() -> Vec<ExchangeRecord> {
    vec![
        ExchangeRecord {
            id: "1".to_string(),
            product_name: "多功能清洁套装".to_string(),
            exchange_date: "2024-06-10".to_string(),
            points: 500,
            status: OrderStatus::Completed,
            order_number: "EX202406100001".to_string(),
            address: "北京市海淀区中关村大街1号".to_string(),
            tracking_number: Some("SF1234567890".to_string()),
            logistics: Some("顺丰速运".to_string()),
        },
        ExchangeRecord {
            id: "2".to_string(),
            product_name: "智能收纳盒".to_string(),
            exchange_date: "2024-06-05".to_string(),
            points: 300,
            status: OrderStatus::Shipped,
            order_number: "EX202406050002".to_string(),
            address: "北京市海淀区中关村大街1号".to_string(),
            tracking_number: Some("YT0987654321".to_string()),
            logistics: Some("圆通速递".to_string()),
        },
        ExchangeRecord {
            id: "3".to_string(),
            product_name: "厨房调味料套装".to_string(),
            exchange_date: "2024-06-01".to_string(),
            points: 800,
            status: OrderStatus::Pending,
            order_number: "EX202406010003".to_string(),
            address: "北京市海淀区中关村大街1号".to_string(),
            tracking_number: None,
            logistics: None,
        },
        ExchangeRecord {
            id: "4".to_string(),
            product_name: "防滑厨房手套".to_string(),
            exchange_date: "2024-05-20".to_string(),
            points: 150,
            status: OrderStatus::Completed,
            order_number: "EX202405200004".to_string(),
            address: "北京市海淀区中关村大街1号".to_string(),
            tracking_number: Some("ZT5678901234".to_string()),
            logistics: Some("中通快递".to_string()),
        },
    ]
}
