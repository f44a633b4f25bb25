pub const CUSTOMER_HEADER: &str = "CustomerID,FirstName,LastName,Email,Phone,City,Country";
pub const PRODUCT_HEADER: &str = "ProductID,ProductName,Category,Price,Stock";
pub const ORDER_HEADER: &str = "OrderID,CustomerID,ProductID,OrderDate,Quantity";

/// The three extract files a full load reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractFile {
    Customers,
    Products,
    Orders,
}

impl ExtractFile {
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Customers => "customers.csv",
            Self::Products => "products.csv",
            Self::Orders => "orders.csv",
        }
    }

    pub fn header(&self) -> &'static str {
        match self {
            Self::Customers => CUSTOMER_HEADER,
            Self::Products => PRODUCT_HEADER,
            Self::Orders => ORDER_HEADER,
        }
    }

    /// Renders `rows` below the standard header.
    pub fn render(&self, rows: &[String]) -> String {
        let mut content = String::from(self.header());
        content.push('\n');
        for row in rows {
            content.push_str(row);
            content.push('\n');
        }
        content
    }
}
