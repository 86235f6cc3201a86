use axum::response::Json;
use serde_json::{json, Value};

/// Static catalog, bilingual Marathi/English. No mutation path exists;
/// content updates ship with the binary.
pub async fn get_welfare_schemes() -> Json<Value> {
    let schemes = json!([
        {
            "id": "1",
            "name": "महिला सशक्तीकरण योजना",
            "name_en": "Women Empowerment Scheme",
            "description": "महिलांसाठी विशेष आर्थिक सहाय्य योजना",
            "description_en": "Special financial assistance scheme for women",
            "eligibility": ["महिला असणे आवश्यक", "वय 18-60 वर्षे", "कुटुंबाचे उत्पन्न ₹3 लाखापेक्षा कमी"],
            "benefits": ["₹50,000 आर्थिक सहाय्य", "कौशल्य विकास प्रशिक्षण", "रोजगार सहाय्य"],
            "application_process": "ऑनलाइन अर्ज करा",
            "documents_required": ["आधार कार्ड", "उत्पन्न प्रमाणपत्र", "बँक पासबुक"]
        },
        {
            "id": "2",
            "name": "बेटी बचाओ बेटी पढाओ",
            "name_en": "Beti Bachao Beti Padhao",
            "description": "मुलींच्या शिक्षणासाठी विशेष योजना",
            "description_en": "Special scheme for girls' education",
            "eligibility": ["मुलगी असणे आवश्यक", "शैक्षणिक संस्थेत प्रवेश", "कुटुंबाचे उत्पन्न मर्यादेत"],
            "benefits": ["शिक्षण शुल्क माफी", "पुस्तके आणि गणवेश", "मासिक शिष्यवृत्ती"],
            "application_process": "शाळा/महाविद्यालयात अर्ज करा",
            "documents_required": ["जन्म प्रमाणपत्र", "शैक्षणिक प्रमाणपत्रे", "उत्पन्न प्रमाणपत्र"]
        }
    ]);

    Json(json!({ "success": true, "schemes": schemes }))
}
