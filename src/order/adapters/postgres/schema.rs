//! Diesel schema for order persistence.

diesel::table! {
    /// Customer orders.
    ///
    /// `order_number` carries a unique constraint
    /// (`orders_order_number_key`) that turns same-second number
    /// collisions into insert failures. `created_by` references
    /// `employees (id)` with cascade-on-delete. `total_amount` is
    /// `NUMERIC(10, 2)`.
    orders (id) {
        /// Internal order identifier.
        id -> Uuid,
        /// Generated order number.
        #[max_length = 20]
        order_number -> Varchar,
        /// Customer name.
        #[max_length = 100]
        customer_name -> Varchar,
        /// Customer email address.
        #[max_length = 254]
        customer_email -> Varchar,
        /// Customer phone number.
        #[max_length = 20]
        customer_phone -> Varchar,
        /// Creation instant.
        order_date -> Timestamptz,
        /// Fulfilment status.
        #[max_length = 20]
        status -> Varchar,
        /// Order total.
        total_amount -> Numeric,
        /// Recording employee; cascades on employee deletion.
        created_by -> Uuid,
        /// Free-form notes.
        notes -> Text,
    }
}
