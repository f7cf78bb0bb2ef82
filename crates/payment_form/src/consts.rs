//! Messages, labels and placeholders shown by the payment form.

pub const CARD_NUMBER_REQUIRED: &str = "Card number is required";
pub const CARD_NUMBER_INVALID: &str = "Invalid card number";
pub const CARDHOLDER_NAME_REQUIRED: &str = "Cardholder name is required";
pub const EXPIRY_DATE_REQUIRED: &str = "Expiry date is required";
pub const EXPIRY_DATE_INVALID: &str = "Invalid format (MM/YY)";
pub const CVV_REQUIRED: &str = "CVV is required";
pub const CVV_INVALID: &str = "Invalid CVV";
pub const UPI_ID_REQUIRED: &str = "UPI ID is required";
pub const UPI_ID_INVALID: &str = "Invalid UPI ID format (e.g., username@bank)";
pub const BANK_REQUIRED: &str = "Please select a bank";

/// Shown under the UPI id while it has no error.
pub const UPI_ID_HELPER_TEXT: &str = "Enter your UPI ID (e.g., username@applepay)";
pub const NETBANKING_REDIRECT_NOTICE: &str =
    "You will be redirected to your bank's secure login page";

pub const SUBMIT_LABEL_LOADING: &str = "Processing...";
pub const SUBMIT_LABEL_CARD: &str = "Pay Now";
pub const SUBMIT_LABEL_UPI: &str = "Pay with UPI";
pub const SUBMIT_LABEL_NETBANKING: &str = "Proceed to Bank";

pub const CARD_NUMBER_PLACEHOLDER: &str = "1234 5678 9012 3456";
pub const CARDHOLDER_NAME_PLACEHOLDER: &str = "John Doe";
pub const EXPIRY_DATE_PLACEHOLDER: &str = "MM/YY";
pub const CVV_PLACEHOLDER: &str = "123";
pub const UPI_ID_PLACEHOLDER: &str = "username@applepay";
pub const BANK_PLACEHOLDER: &str = "Select Bank";

/// Banks offered for net banking when no list is configured.
pub const DEFAULT_BANKS: [&str; 12] = [
    "State Bank of India",
    "HDFC Bank",
    "ICICI Bank",
    "Axis Bank",
    "Kotak Mahindra Bank",
    "Punjab National Bank",
    "Bank of Baroda",
    "Canara Bank",
    "Union Bank of India",
    "IndusInd Bank",
    "Yes Bank",
    "IDFC First Bank",
];

/// Popular UPI apps with their brand colour, suggested next to the UPI id.
pub const DEFAULT_UPI_APPS: [(&str, &str); 4] = [
    ("Google Pay", "#4285F4"),
    ("Apple Pay", "#5F259F"),
    ("CRED", "#00BAF2"),
    ("Amazon Pay", "#FF9900"),
];
