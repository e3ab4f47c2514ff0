//! Reference blog post used by the `demo` command and the test suites.

/// A four-section post about AI in healthcare.
pub const SAMPLE_BLOG_POST: &str = r#"# The Future of Artificial Intelligence in Healthcare
    
## Introduction

Artificial intelligence (AI) is revolutionizing the healthcare industry, offering innovative solutions to long-standing challenges. From diagnostics to treatment plans, AI technologies are being integrated into various aspects of healthcare delivery. These advancements promise to improve patient outcomes, reduce costs, and enhance operational efficiency.

The rapid development of machine learning algorithms, coupled with the increasing availability of healthcare data, has created unprecedented opportunities for AI applications in medicine. Healthcare providers, researchers, and technology companies are collaborating to harness this potential.

## Diagnostic Applications

One of the most promising applications of AI in healthcare is in diagnostics. Machine learning algorithms can analyze medical images such as X-rays, MRIs, and CT scans with remarkable accuracy. In some cases, AI systems have demonstrated the ability to detect conditions like cancer at earlier stages than human radiologists.

Computer vision technologies can identify subtle patterns that might be missed by the human eye. For example, AI systems can detect minute changes in skin lesions that could indicate melanoma, potentially saving lives through early intervention.

## Treatment Planning

AI is also transforming treatment planning by analyzing vast amounts of patient data to recommend personalized treatment options. These systems can consider a patient's medical history, genetic information, lifestyle factors, and responses to previous treatments.

By processing this comprehensive data, AI can help clinicians develop more effective treatment plans. This is particularly valuable in complex cases where multiple treatment options exist, or when standard approaches have been unsuccessful.

## Conclusion

The future of AI in healthcare is bright, with potential benefits for patients, providers, and healthcare systems. As technology continues to evolve, collaboration between technologists, healthcare professionals, ethicists, and policymakers will be essential to realize the full potential of AI while mitigating risks.
"#;

/// Title carried by [`SAMPLE_BLOG_POST`].
pub const SAMPLE_TITLE: &str = "The Future of Artificial Intelligence in Healthcare";
