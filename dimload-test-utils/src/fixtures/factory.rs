//! CSV row factories.
//!
//! Rows match the standard headers in [`crate::fixtures::extract`].

/// Customer row with every field populated.
///
/// Phone is `+1 (555) 010-` followed by the id padded to four digits, so
/// customer 7 cleans to `+15550100007`.
pub fn customer_row(customer_id: i64) -> String {
    format!(
        "{id},First{id},Last{id},customer{id}@example.com,+1 (555) 010-{id:04},Lisbon,Portugal",
        id = customer_id
    )
}

/// Customer row with email, phone, city and country left empty.
pub fn sparse_customer_row(customer_id: i64) -> String {
    format!("{id},First{id},Last{id},,,,", id = customer_id)
}

/// Product row in `category`, or without a category when `None`.
pub fn product_row(product_id: i64, category: Option<&str>) -> String {
    format!(
        "{id},Product {id},{category},{price}.50,{stock}",
        id = product_id,
        category = category.unwrap_or(""),
        price = product_id * 10,
        stock = product_id * 3
    )
}

/// Order row placed on `order_date`, written verbatim.
pub fn order_row(order_id: i64, order_date: &str) -> String {
    format!("{id},1,1,{date},2", id = order_id, date = order_date)
}
