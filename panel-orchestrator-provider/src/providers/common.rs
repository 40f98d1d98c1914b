//! Provider 公共工具函数

use crate::types::Account;

/// 自定义 ACL 的套餐字段名
pub const ACL_CUSTOM_KEY: &str = "ACL";
/// 普通账户默认 ACL
pub const DEFAULT_USER_ACL: &str = "user";
/// 代理商账户默认 ACL
pub const DEFAULT_RESELLER_ACL: &str = "reseller";
/// 全名中没有姓氏时的占位值
pub const UNKNOWN_LAST_NAME: &str = "Unknown";

// ============ 账户字段转换 ============

/// 将全名按第一个空格拆分为 (名, 姓)
/// 如: "John Smith" -> ("John", "Smith")
/// 如: "Ana Maria Lopez" -> ("Ana", "Maria Lopez")
/// 如: "Madonna" -> ("Madonna", "Unknown")
pub fn split_full_name(full_name: &str) -> (String, String) {
    let full_name = full_name.trim();
    match full_name.split_once(' ') {
        Some((first, rest)) if !rest.trim().is_empty() => {
            (first.to_string(), rest.trim().to_string())
        }
        Some((first, _)) => (first.to_string(), UNKNOWN_LAST_NAME.to_string()),
        None => (full_name.to_string(), UNKNOWN_LAST_NAME.to_string()),
    }
}

/// 解析账户 ACL：优先使用套餐自定义值，否则按是否代理商取默认值
pub fn resolve_acl(account: &Account) -> &str {
    account
        .package
        .custom_value(ACL_CUSTOM_KEY)
        .unwrap_or(if account.reseller {
            DEFAULT_RESELLER_ACL
        } else {
            DEFAULT_USER_ACL
        })
}

// ============ 套餐名称处理 ============

/// 面板套餐命名规则：`{所属用户名}_{去空格的套餐名}`
/// 如: "acme" + "Pro Plan" -> "acme_ProPlan"
pub fn namespaced_package_name(owner: &str, package_name: &str) -> String {
    let stripped: String = package_name.chars().filter(|c| *c != ' ').collect();
    format!("{owner}_{stripped}")
}
